use std::fmt::{self, Display};

use tfrrs_scraping_utils::regex;

/// A time or distance mark as a plain number (seconds for running events).
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Mark(f64);

impl Mark {
    pub fn seconds(self) -> f64 {
        self.0
    }
}

impl From<f64> for Mark {
    fn from(seconds: f64) -> Self {
        Self(seconds)
    }
}

/// Parses `m:ss.xx` or `ss.xx`, ignoring the `#` and `@` annotations the
/// list attaches to some marks.  Trailing units such as `m` are ignored.
pub fn parse_mark(text: &str) -> Option<Mark> {
    let clean = text.replace(['#', '@'], "");
    let captures = regex!(r"^\s*(?:(\d+):)?(\d+(?:\.\d*)?)").captures(&clean)?;
    let seconds: f64 = captures[2].parse().ok()?;
    let minutes: f64 = match captures.get(1) {
        Some(minutes) => minutes.as_str().parse().ok()?,
        None => 0.,
    };
    Some(Mark(minutes * 60. + seconds))
}

/// `m:ss.xx`, rounded to hundredths.
impl Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = (self.0 * 100.).round() as u64;
        let minutes = hundredths / 6000;
        let rest = hundredths % 6000;
        write!(f, "{}:{:02}.{:02}", minutes, rest / 100, rest % 100)
    }
}
