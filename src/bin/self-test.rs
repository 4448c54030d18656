/*!
 * commons-util self-test program
 *
 * Runs the literal scenarios of every module against the built library and
 * writes a JSON report. Pass a file path as the first argument to save the
 * report; otherwise it is printed after the summary.
 *
 * Log output follows RUST_LOG (default "warn").
 */

#![forbid(unsafe_code)]

use std::fs;

use anyhow::{bail, Context, Result};
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commons_util::{
    array,
    convert,
    strings,
    types::{self, PrimitiveKind, TypeDescriptor},
    ByteOrder,
    Hash,
    HashBuilder,
    UtilError,
};

/* Report structures */
#[derive(Debug, serde::Serialize)]
struct CaseResult {
    name: String,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct SectionResult {
    section: &'static str,
    cases: Vec<CaseResult>,
}

impl SectionResult {
    fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }
}

#[derive(Debug, serde::Serialize)]
struct CodecVector {
    width: usize,
    order: ByteOrder,
    value: i64,
    hex: String,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    library: String,
    version: String,
    timestamp: String,
    sections: Vec<SectionResult>,
    codec_vectors: Vec<CodecVector>,
    total_cases: usize,
    passed_cases: usize,
}

/* Console output */
struct Logger;

impl Logger {
    fn banner(msg: &str) {
        println!("{}", "═══════════════════════════════════════════".blue());
        println!("{}", msg.blue().bold());
        println!("{}", "═══════════════════════════════════════════".blue());
    }

    fn section(name: &str) {
        println!("\n{}", name.cyan());
    }

    fn case(result: &CaseResult) {
        if result.passed {
            println!("  {} {}", "PASS".green(), result.name);
        } else {
            println!("  {} {}", "FAIL".red(), result.name);
            if let Some(detail) = &result.detail {
                println!("    {}", detail.red());
            }
        }
    }
}

/// Compare and record one case
fn check<T: PartialEq + std::fmt::Debug>(name: &str, actual: T, expected: T) -> CaseResult {
    let passed = actual == expected;
    let detail = (!passed).then(|| format!("expected {:?}, got {:?}", expected, actual));
    debug!(case = name, passed, "self-test case");
    CaseResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn array_section() -> SectionResult {
    let letters = ['a', 'b', 'c', 'd', 'e', 'f'];
    let numbers = [0, 1, 2, 3, 0];
    let empty: Option<Vec<i32>> = array::subarray(Some(&numbers[..]), 3, 1);

    SectionResult {
        section: "array",
        cases: vec![
            check(
                "subarray clamps a negative start",
                array::subarray(Some(&letters[..]), -2, 4),
                Some(vec!['a', 'b', 'c', 'd']),
            ),
            check(
                "empty subarray does not allocate",
                empty.map(|v| v.capacity()),
                Some(0),
            ),
            check(
                "index_of_from skips earlier matches",
                array::index_of_from(Some(&numbers[..]), &0, 2),
                Some(4),
            ),
            check("add to absent array", array::add(None, 7), vec![7]),
            check(
                "remove out of range fails",
                array::remove(Some(&numbers[..]), 5),
                Err(UtilError::index_out_of_bounds(5, 5)),
            ),
            check(
                "tolerance search",
                array::index_of_tolerance(Some(&[1.0, 2.05, 3.0][..]), 2.0, 0.1),
                Some(1),
            ),
        ],
    }
}

fn codec_section(vectors: &mut Vec<CodecVector>) -> Result<SectionResult> {
    let value = 0xAB00AB00u32 as i32;
    let mut cases = Vec::new();

    for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
        let bytes = convert::to_byte_array(value, order);
        let back: i32 = convert::from_byte_array(&bytes, order).context("decoding i32")?;
        cases.push(check(&format!("i32 round trip ({order})"), back, value));
        vectors.push(CodecVector {
            width: bytes.len(),
            order,
            value: i64::from(value),
            hex: hex::encode(&bytes),
        });

        let long = -2i64;
        let bytes = convert::to_byte_array(long, order);
        let back: i64 = convert::from_byte_array(&bytes, order).context("decoding i64")?;
        cases.push(check(&format!("i64 round trip ({order})"), back, long));
        vectors.push(CodecVector {
            width: bytes.len(),
            order,
            value: long,
            hex: hex::encode(&bytes),
        });
    }

    cases.push(check(
        "big-endian literal",
        convert::to_byte_array(value, ByteOrder::BigEndian),
        vec![0xAB, 0x00, 0xAB, 0x00],
    ));
    cases.push(check(
        "unknown byte order is rejected",
        convert::to_byte_array_named(1i16, "MIDDLE_ENDIAN").is_err(),
        true,
    ));

    Ok(SectionResult { section: "codec", cases })
}

fn hash_section() -> SectionResult {
    let none: Option<i32> = None;
    SectionResult {
        section: "hash",
        cases: vec![
            check("combine(7, 11, true)", Hash::combine(7, 11, &true), 78),
            check("absent value contributes zero", Hash::combine(7, 11, &none), 77),
            check(
                "builder matches manual combine",
                HashBuilder::new().append(&1).append("a").to_hash_code(),
                Hash::combine(Hash::combine(17, 37, &1), 37, "a"),
            ),
        ],
    }
}

fn convert_section() -> SectionResult {
    SectionResult {
        section: "convert",
        cases: vec![
            check("parse with default", convert::parse_or::<i32>(Some("x1"), 5), 5),
            check("parse float trims", convert::parse::<f64>(Some(" 2.5 ")), 2.5),
            check("int to boolean", convert::to_boolean(3i32), true),
            check(
                "epoch millis to date",
                convert::to_date(0i64).map(|d| d.timestamp_millis()),
                Some(0),
            ),
            check("cast narrows", convert::cast::<i32, i8>(300), 44),
        ],
    }
}

fn strings_section() -> Result<SectionResult> {
    let replaced = strings::replace_each_repeatedly("abcde", &["ab", "d"], &["d", "t"])
        .context("replace_each_repeatedly")?;

    Ok(SectionResult {
        section: "strings",
        cases: vec![
            check("snake case keeps acronyms", strings::to_snake_case("XMLHttpRequest"), "xml_http_request".to_string()),
            check("camel case", strings::to_camel_case("hello-world_test"), "helloWorldTest".to_string()),
            check("center", strings::center("ab", 6, '*'), "**ab**".to_string()),
            check("negative substring", strings::substring_range("abcdef", -3, -1), "de".to_string()),
            check(
                "split by char type",
                strings::split_by_char_type_camel_case("foo200Bar"),
                vec!["foo".to_string(), "200".to_string(), "Bar".to_string()],
            ),
            check("repeated replacement", replaced, "tcte".to_string()),
            check(
                "replacement cycle aborts",
                strings::replace_each_repeatedly("ab", &["a", "b"], &["b", "a"]).is_err(),
                true,
            ),
        ],
    })
}

fn types_section() -> Result<SectionResult> {
    let descriptor = TypeDescriptor::parse("[[I").context("parsing descriptor")?;

    Ok(SectionResult {
        section: "types",
        cases: vec![
            check("short name of array descriptor", types::short_name("[Ljava.lang.String;"), "String[]".to_string()),
            check("package name", types::package_name("java.util.Map$Entry"), "java.util".to_string()),
            check("canonical name", descriptor.canonical_name(), "int[][]".to_string()),
            check("int widens to double", PrimitiveKind::Int.widens_to(PrimitiveKind::Double), true),
            check("long is not assignable to int", types::is_assignable(PrimitiveKind::Long, PrimitiveKind::Int), false),
        ],
    })
}

fn run() -> Result<Report> {
    let mut vectors = Vec::new();
    let sections = vec![
        array_section(),
        codec_section(&mut vectors)?,
        hash_section(),
        convert_section(),
        strings_section()?,
        types_section()?,
    ];

    let total_cases = sections.iter().map(|s| s.cases.len()).sum();
    let passed_cases = sections.iter().map(SectionResult::passed).sum();

    Ok(Report {
        library: env!("CARGO_PKG_NAME").to_string(),
        version: commons_util::VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        sections,
        codec_vectors: vectors,
        total_cases,
        passed_cases,
    })
}

fn display_summary(report: &Report) {
    Logger::banner("            SELF-TEST SUMMARY");
    for section in &report.sections {
        Logger::section(section.section);
        for case in &section.cases {
            Logger::case(case);
        }
    }

    let line = format!("\nCases passed: {}/{}", report.passed_cases, report.total_cases);
    if report.passed_cases == report.total_cases {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!(version = commons_util::VERSION, "starting self-test");
    let report = run().context("Self-test execution failed")?;
    display_summary(&report);

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    match std::env::args().nth(1) {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("Cannot write report: {}", path))?;
            println!("{}", format!("Report saved to: {}", path).blue());
        }
        None => println!("{}", json),
    }

    if report.passed_cases != report.total_cases {
        bail!("{} of {} cases failed", report.total_cases - report.passed_cases, report.total_cases);
    }
    Ok(())
}
