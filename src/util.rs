use chrono::{NaiveDate, Utc};

/// Hands out millisecond-timestamp ids that stay strictly increasing, even
/// when two entries are created within the same millisecond.
#[derive(Debug, Default)]
pub struct IdSource {
    last: u64,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last + 1);
        self.last = id;
        id
    }
}

/// Parse a YYYY-MM-DD date string.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

/// True for text a reps/weight field may hold while it is being typed:
/// digits with at most one decimal point. `""`, `"."`, `".5"` and `"5."` all pass.
pub fn is_numeric_or_empty(s: &str) -> bool {
    let mut dots = 0;
    s.chars().all(|c| match c {
        '0'..='9' => true,
        '.' => {
            dots += 1;
            dots == 1
        }
        _ => false,
    })
}

/// `-` in place of an empty field.
pub fn dash_if_empty(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
