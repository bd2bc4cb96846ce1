use chrono::NaiveDate;
use nusmods_cache::{ByteStore, FetchError, FetchFuture, Fetcher, MemoryByteStore, StoreError, StoreFuture};
use nusmods_calendar::{AcademicCalendar, SemesterWindow};
use nusmods_config::ClientConfig;
use nusmods_sync::NusModsClient;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

pub const YEAR: &str = "2025-2026";

/// Fetcher serving canned bodies by path and recording every request.
#[derive(Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.bodies.insert(path.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Fetcher for FakeFetcher {
    fn fetch<'a>(&'a self, path: &'a str) -> FetchFuture<'a> {
        self.requests.lock().unwrap().push(path.to_string());
        let result = self.bodies.get(path).cloned().ok_or(FetchError::Status {
            status: 404,
            path: path.to_string(),
        });
        Box::pin(async move { result })
    }
}

/// Store that accepts reads but rejects every write.
#[allow(dead_code)]
pub struct ReadOnlyStore;

impl ByteStore for ReadOnlyStore {
    fn get<'a>(&'a self, _key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>> {
        Box::pin(async { Ok(None) })
    }

    fn put<'a>(&'a self, _key: &'a str, _bytes: &'a [u8]) -> StoreFuture<'a, ()> {
        Box::pin(async {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        })
    }
}

#[allow(dead_code)]
pub fn client(fetcher: Arc<FakeFetcher>, store: Arc<dyn ByteStore>) -> NusModsClient {
    NusModsClient::new(ClientConfig::new(YEAR).unwrap(), fetcher, store)
}

#[allow(dead_code)]
pub fn memory_client(fetcher: Arc<FakeFetcher>) -> (NusModsClient, Arc<MemoryByteStore>) {
    let store = Arc::new(MemoryByteStore::new());
    (client(fetcher, store.clone()), store)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Semester 2 of AY2024/25: week 1 starts Monday 2025-01-06, recess in week 7.
#[allow(dead_code)]
pub fn calendar() -> AcademicCalendar {
    let sem1 = SemesterWindow::new(date(2024, 8, 12), Some(7), Some(14));
    let sem2 = SemesterWindow::new(date(2025, 1, 6), Some(7), None);
    AcademicCalendar::new(sem1, sem2)
}

#[allow(dead_code)]
pub const TIMETABLE_JSON: &str = r#"[
    {
        "classNo": "1",
        "day": "Tuesday",
        "startTime": "0800",
        "endTime": "0900",
        "lessonType": "Lecture",
        "venue": "LT27",
        "weeks": [1, 2, 7, 8]
    },
    {
        "classNo": "T01",
        "day": "Thursday",
        "startTime": "1400",
        "endTime": "1500",
        "lessonType": "Tutorial",
        "venue": "COM1-0208",
        "weeks": [{"start": 3, "end": 9, "weekInterval": 3}]
    }
]"#;
