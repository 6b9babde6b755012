#![cfg(feature = "std")]

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use csv::ReaderBuilder;
use elemental::avec::{Options, render, render_reader};

const FIXTURES: &str = "tests/fixtures";

#[test]
fn render_slice_fixtures() {
    for case in Case::load() {
        let data = case.data();

        let mut s = String::new();
        render(&data, &case.options, &mut s).unwrap();

        case.validate(&s);
    }
}

#[test]
fn render_reader_fixtures() {
    for case in Case::load() {
        let mut data = Cursor::new(case.data());

        let mut out = Vec::new();
        render_reader(&mut data, &case.options, &mut out).unwrap();

        case.validate(&String::from_utf8(out).unwrap());
    }
}

/// A fixture buffer with the options to render it with and the lines expected.
struct Case {
    fixture: String,
    options: Options,
    expected: Vec<String>,
}

impl Case {
    fn load() -> Vec<Self> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(Path::new(FIXTURES).join("cases.csv"))
            .unwrap();

        let cases: Vec<Self> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                let mut fields = r.iter();

                let fixture = fields.next().unwrap().to_string();
                let unknown = fields.next().unwrap().parse().unwrap();
                let expected = fields.map(|f| f.replace("\\t", "\t")).collect();

                Self {
                    fixture,
                    options: Options {
                        unknown,
                        ..Options::default()
                    },
                    expected,
                }
            })
            .collect();

        assert!(!cases.is_empty());
        cases
    }

    fn path(&self) -> PathBuf {
        Path::new(FIXTURES).join(&self.fixture).with_extension("hex")
    }

    /// The fixture as bytes. Fixtures hold whitespace-separated hex pairs, and
    /// `#` starts a comment running to the end of the line.
    fn data(&self) -> Vec<u8> {
        let text = std::fs::read_to_string(self.path()).unwrap();

        text.lines()
            .flat_map(|line| line.split('#').next().unwrap_or_default().split_whitespace())
            .map(|pair| u8::from_str_radix(pair, 16).unwrap())
            .collect()
    }

    fn validate(&self, s: &str) {
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines, self.expected, "fixture {} (unknown: {})", self.fixture, self.options.unknown);
    }
}
