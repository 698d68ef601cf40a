//! # Admin view
//!
//! Shows the stored registrations as a table, the newest first.
//!
//! The registrations are read through `GET /registrations` of the API server.
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime};
use serde_json::Value;

pub const UNAVAILABLE: &str = "Tanggal tidak tersedia";

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const HEADERS: [&str; 5] = [
    "Full Name",
    "Phone Number",
    "Attendance Date",
    "Registration Date",
    "Created At",
];

/// Formats a timestamp as a long Indonesian date (e.g. `7 Juli 2019`).
pub fn format_date(t: &NaiveDateTime) -> String {
    format!("{} {} {}", t.day(), MONTHS[t.month0() as usize], t.year())
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s).ok().map(|t| t.naive_utc())
        })
}

fn date_or_unavailable(v: &Value) -> String {
    v.as_str()
        .and_then(parse_timestamp)
        .map(|t| format_date(&t))
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub full_name: String,
    pub phone_number: String,
    pub attendance_date: String,
    pub registration_date: String,
    pub created_at: String,
}

impl Row {
    /// Builds a row from a serialized registration.
    ///
    /// Missing or unreadable dates are shown as `UNAVAILABLE`.
    pub fn from_json(v: &Value) -> Self {
        let text = |key: &str| v[key].as_str().unwrap_or("").to_string();

        let attendance_date = match v["attendance_date"].as_str() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => UNAVAILABLE.to_string(),
        };

        Self {
            full_name: text("full_name"),
            phone_number: text("phone_number"),
            attendance_date,
            registration_date: date_or_unavailable(&v["registration_date"]),
            created_at: date_or_unavailable(&v["created_at"]),
        }
    }

    fn cells(&self) -> [&str; 5] {
        [
            &self.full_name,
            &self.phone_number,
            &self.attendance_date,
            &self.registration_date,
            &self.created_at,
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Loading,
    Empty,
    Rows(Vec<Row>),
    Error(String),
}

impl View {
    /// Reads the body of a `GET /registrations` response.
    pub fn from_response(body: &Value) -> Self {
        if !body["success"].as_bool().unwrap_or(false) {
            let message = body["message"]
                .as_str()
                .filter(|m| !m.is_empty())
                .unwrap_or("Failed to fetch registrations");
            return View::Error(message.to_string());
        }
        match body["data"].as_array() {
            Some(data) if !data.is_empty() => {
                View::Rows(data.iter().map(Row::from_json).collect())
            },
            _ => View::Empty,
        }
    }

    /// Requests `GET /registrations` from the API server at `base_url`.
    pub fn fetch(base_url: &str) -> Self {
        let url = format!("{}/registrations", base_url.trim_end_matches('/'));

        let res = match reqwest::blocking::get(&url) {
            Ok(res) => res,
            Err(e) => return View::Error(e.to_string()),
        };
        if !res.status().is_success() {
            return View::Error(format!(
                "HTTP error! status: {}",
                res.status().as_u16()
            ));
        }
        match res.json::<Value>() {
            Ok(body) => View::from_response(&body),
            Err(e) => View::Error(e.to_string()),
        }
    }
}

fn write_line(
    f: &mut fmt::Formatter,
    cells: &[&str; 5],
    widths: &[usize; 5],
) -> fmt::Result
{
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(c, w)| format!("{:<w$}", c, w = *w))
        .collect::<Vec<String>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = match self {
            View::Loading => return write!(f, "Loading registrations..."),
            View::Empty => return write!(f, "No registrations found"),
            View::Error(m) => {
                return write!(f, "Failed to load registrations: {}", m)
            },
            View::Rows(rows) => rows,
        };

        let mut widths = [0; 5];
        for (i, h) in HEADERS.iter().enumerate() {
            widths[i] = h.chars().count();
        }
        for row in rows {
            for (i, c) in row.cells().iter().enumerate() {
                widths[i] = widths[i].max(c.chars().count());
            }
        }

        write_line(f, &HEADERS, &widths)?;
        for row in rows {
            write_line(f, &row.cells(), &widths)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::json;

    use crate::model::registration::data::REGISTRATIONS;

    #[test]
    fn test_format_date() {
        let r = REGISTRATIONS.get("oswald").unwrap();
        assert_eq!(format_date(&r.created_at), "7 Juli 2019");

        let t = NaiveDateTime::parse_from_str(
            "2026-10-19T23:59:59",
            "%Y-%m-%dT%H:%M:%S",
        )
        .unwrap();
        assert_eq!(format_date(&t), "19 Oktober 2026");
    }

    #[test]
    fn test_row_from_json() {
        let row = Row::from_json(&json!({
            "id": "9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d",
            "full_name": "Oswald",
            "phone_number": "081234567890",
            "attendance_date": "2026-10-20",
            "registration_date": "2026-10-19T08:15:30.123456",
            "created_at": "2026-01-02T03:04:05.000Z",
        }));
        assert_eq!(row.attendance_date, "2026-10-20");
        assert_eq!(row.registration_date, "19 Oktober 2026");
        assert_eq!(row.created_at, "2 Januari 2026");
    }

    #[test]
    fn test_row_from_json_with_unavailable_dates() {
        let row = Row::from_json(&json!({
            "full_name": "Oswald",
            "phone_number": "081234567890",
            "registration_date": "yesterday",
        }));
        assert_eq!(row.attendance_date, UNAVAILABLE);
        assert_eq!(row.registration_date, UNAVAILABLE);
        assert_eq!(row.created_at, UNAVAILABLE);
    }

    #[test]
    fn test_view_from_response() {
        assert_eq!(
            View::from_response(&json!({"success": true, "data": []})),
            View::Empty
        );
        assert_eq!(View::from_response(&json!({"success": true})), View::Empty);
        assert_eq!(
            View::from_response(&json!({
                "success": false,
                "message": "Failed to fetch registrations",
                "error": "connection refused",
            })),
            View::Error("Failed to fetch registrations".to_string())
        );
        assert_eq!(
            View::from_response(&json!(null)),
            View::Error("Failed to fetch registrations".to_string())
        );

        let view = View::from_response(&json!({
            "success": true,
            "data": [
                {"full_name": "Henry", "attendance_date": "2019-07-12"},
                {"full_name": "Oswald", "attendance_date": "2019-07-10"},
            ],
        }));
        if let View::Rows(rows) = view {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].full_name, "Henry");
            assert_eq!(rows[1].full_name, "Oswald");
        } else {
            panic!("must have rows");
        }
    }

    #[test]
    fn test_view_fetch_from_unreachable_server() {
        match View::fetch("http://127.0.0.1:1/") {
            View::Error(m) => assert!(!m.is_empty()),
            v => panic!("unexpected view: {:?}", v),
        }
    }

    #[test]
    fn test_view_format() {
        assert_eq!(View::Loading.to_string(), "Loading registrations...");
        assert_eq!(View::Empty.to_string(), "No registrations found");
        assert_eq!(
            View::Error("timed out".to_string()).to_string(),
            "Failed to load registrations: timed out"
        );

        let view = View::Rows(vec![Row {
            full_name: "Al".to_string(),
            phone_number: "0812345678".to_string(),
            attendance_date: "2019-07-12".to_string(),
            registration_date: "9 Juli 2019".to_string(),
            created_at: "9 Juli 2019".to_string(),
        }]);
        assert_eq!(
            view.to_string(),
            "Full Name  Phone Number  Attendance Date  Registration Date  \
             Created At\n\
             Al         0812345678    2019-07-12       9 Juli 2019        \
             9 Juli 2019\n"
        );
    }
}
