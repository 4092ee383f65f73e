use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    // lines look like: "[Succ] tsp-1.in (2.50s)"; elapsed times only have
    // ASCII digits
    static ref RECORD_REG: Regex =
        Regex::new(r"\[(Succ|Fail)\]\s+([\w-]+)\.in\s+\(([0-9]+\.[0-9]+s)\)")
            .expect("record regex should be valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Succ,
    Fail,
}

impl Status {
    fn parse(tag: &str) -> Result<Self, Report> {
        match tag {
            "Succ" => Ok(Status::Succ),
            "Fail" => Ok(Status::Fail),
            tag => eyre::bail!("unsupported status tag: {:?}", tag),
        }
    }

    pub fn is_fail(&self) -> bool {
        self == &Status::Fail
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Succ => write!(f, "Succ"),
            Status::Fail => write!(f, "Fail"),
        }
    }
}

/// A single test-case outcome, as found in one line of a results log.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub status: Status,
    pub name: String,
    pub elapsed: f64,
}

impl Record {
    /// Extracts all records from the contents of a results log, in the order
    /// they appear. Text not matching the record pattern is skipped.
    pub fn parse_all(contents: &str) -> Result<Vec<Self>, Report> {
        RECORD_REG
            .captures_iter(contents)
            .map(|captures| {
                // all three groups are mandatory in the pattern
                let status = Status::parse(&captures[1])?;
                let name = Self::parse_name(&captures[2])?;
                let elapsed = Self::parse_elapsed(&captures[3])?;
                Ok(Self {
                    status,
                    name,
                    elapsed,
                })
            })
            .collect()
    }

    // Keeps only the alphanumeric characters of the test-case identifier,
    // e.g. "tsp-1" becomes "tsp1".
    fn parse_name(identifier: &str) -> Result<String, Report> {
        let name: String = identifier
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        if name.is_empty() {
            eyre::bail!(
                "test-case identifier {:?} has no alphanumeric characters",
                identifier
            );
        }
        Ok(name)
    }

    // Parses something like "2.50s".
    fn parse_elapsed(elapsed: &str) -> Result<f64, Report> {
        let seconds = elapsed.strip_suffix('s').unwrap_or(elapsed);
        seconds
            .parse()
            .wrap_err_with(|| format!("parse elapsed time {:?}", elapsed))
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn one_record_per_matching_line(entries: Vec<(u16, u16, bool)>) -> bool {
        let log: String = entries
            .iter()
            .map(|(id, centis, fail)| {
                let tag = if *fail { "Fail" } else { "Succ" };
                format!(
                    "[{}] case-{}.in ({}.{:02}s)\nsome noise\n",
                    tag,
                    id,
                    centis / 100,
                    centis % 100
                )
            })
            .collect();

        let records = Record::parse_all(&log).expect("log should parse");
        records.len() == entries.len()
            && records.iter().zip(entries.iter()).all(
                |(record, (id, centis, fail))| {
                    let expected = *centis as f64 / 100.0;
                    record.name == format!("case{}", id)
                        && (record.elapsed - expected).abs() < 1e-9
                        && record.status.is_fail() == *fail
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_succ() {
        let records = Record::parse_all("[Succ] tsp-1.in (2.50s)").unwrap();
        assert_eq!(
            records,
            vec![Record {
                status: Status::Succ,
                name: String::from("tsp1"),
                elapsed: 2.5,
            }]
        );
    }

    #[test]
    fn parse_fail() {
        let records = Record::parse_all("[Fail] abc-2.in (0.10s)").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::Fail);
        assert_eq!(records[0].name, "abc2");
        assert_eq!(records[0].elapsed, 0.1);
    }

    #[test]
    fn parse_keeps_order_and_skips_noise() {
        let log = "\
compiling...
[Succ] ex-10.in (12.25s)
[Succ]   ex-2.in   (0.75s)
    output mismatch on line 3
[Fail] ex-3.in (1.00s) trailing text
[Skip] ex-4.in (1.00s)
[Succ] ex-5.out (1.00s)
[Succ] ex-6.in (3s)
";
        let records = Record::parse_all(log).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        let values: Vec<_> = records.iter().map(|r| r.elapsed).collect();
        assert_eq!(names, vec!["ex10", "ex2", "ex3"]);
        assert_eq!(values, vec![12.25, 0.75, 1.0]);
    }

    #[test]
    fn parse_skips_non_ascii_digits() {
        // arabic-indic digits in the elapsed time
        let log = "[Succ] tsp-1.in (\u{0663}.\u{0665}0s)\n\
                   [Succ] tsp-2.in (1.50s)\n";
        let records = Record::parse_all(log).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "tsp2");
        assert_eq!(records[0].elapsed, 1.5);
    }

    #[test]
    fn parse_strips_underscores() {
        let records = Record::parse_all("[Succ] big_map-20.in (4.00s)").unwrap();
        assert_eq!(records[0].name, "bigmap20");
    }

    #[test]
    fn parse_empty() {
        assert!(Record::parse_all("").unwrap().is_empty());
        assert!(Record::parse_all("no results here\n").unwrap().is_empty());
    }

    #[test]
    fn parse_identifier_without_alphanumerics() {
        assert!(Record::parse_all("[Succ] --.in (1.00s)").is_err());
    }

    #[test]
    fn status_show() {
        assert_eq!(Status::Succ.to_string(), "Succ");
        assert_eq!(Status::Fail.to_string(), "Fail");
    }
}
