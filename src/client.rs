//! Client facade over the NUSMods API.
//!
//! Every lookup goes through the read-through cache, keyed by academic year,
//! semester and upper-cased module code.

use crate::error::ClientError;
use crate::fetcher::HttpFetcher;
use nusmods_cache::{ByteStore, CacheConfig, Fetcher, ReadThroughCache, keys};
use nusmods_calendar::{AcademicCalendar, expand_lessons};
use nusmods_config::ClientConfig;
use nusmods_models::{DatedSession, Lesson, ModuleInfo, ModuleListItem, Semester, SemesterData};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, instrument};

/// NUSMods catalog client for one academic year.
#[derive(Clone)]
pub struct NusModsClient {
    config: ClientConfig,
    fetcher: Arc<dyn Fetcher>,
    cache: ReadThroughCache,
}

impl std::fmt::Debug for NusModsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NusModsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NusModsClient {
    /// Create a client from explicit capabilities.
    ///
    /// Tests pass in-memory fakes here; [`NusModsClient::connect`] wires the
    /// real HTTP fetcher and configured store.
    pub fn new(config: ClientConfig, fetcher: Arc<dyn Fetcher>, store: Arc<dyn ByteStore>) -> Self {
        Self {
            config,
            fetcher,
            cache: ReadThroughCache::new(store),
        }
    }

    /// Create a client talking HTTP to the configured API root.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built or the cache store cannot be opened.
    pub async fn connect(config: ClientConfig, cache: &CacheConfig) -> Result<Self, ClientError> {
        let fetcher = HttpFetcher::new(config.base_url.clone(), config.http_timeout)?;
        let store = cache.open_store().await?;

        info!(
            academic_year = %config.academic_year,
            base_url = %config.base_url,
            "NUSMods client ready"
        );

        Ok(Self::new(config, Arc::new(fetcher), store))
    }

    /// Read client and cache settings through `lookup` and connect.
    ///
    /// `lookup` maps an environment variable name to its value; see
    /// [`ClientConfig::from_lookup`] and [`CacheConfig::from_lookup`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for missing or invalid settings.
    pub async fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ClientConfig::from_lookup(&lookup)?;
        let cache = CacheConfig::from_lookup(&lookup);
        Self::connect(config, &cache).await
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn year(&self) -> &str {
        &self.config.academic_year
    }

    /// All modules offered in the academic year.
    pub async fn fetch_module_list(&self) -> Result<Vec<ModuleListItem>, ClientError> {
        let path = format!("{}/moduleList.json", self.year());
        self.get_cached(&path, &keys::module_list(self.year())).await
    }

    pub async fn fetch_module_info(&self, module_code: &str) -> Result<ModuleInfo, ClientError> {
        let code = module_code.to_uppercase();
        let path = format!("{}/modules/{}.json", self.year(), code);
        self.get_cached(&path, &keys::module_info(self.year(), &code))
            .await
    }

    /// Weekly lessons of a module in one semester.
    pub async fn fetch_timetable(
        &self,
        module_code: &str,
        semester: Semester,
    ) -> Result<Vec<Lesson>, ClientError> {
        let code = module_code.to_uppercase();
        let path = format!(
            "{}/semesters/{}/{}/timetable.json",
            self.year(),
            semester.number(),
            code
        );
        self.get_cached(&path, &keys::timetable(self.year(), semester.number(), &code))
            .await
    }

    pub async fn fetch_semester_data(
        &self,
        module_code: &str,
        semester: Semester,
    ) -> Result<SemesterData, ClientError> {
        let code = module_code.to_uppercase();
        let path = format!(
            "{}/semesters/{}/{}/semesterData.json",
            self.year(),
            semester.number(),
            code
        );
        self.get_cached(
            &path,
            &keys::semester_data(self.year(), semester.number(), &code),
        )
        .await
    }

    /// Expand weekly lessons into dated sessions on `calendar`.
    ///
    /// See [`nusmods_calendar::expand_lessons`].
    pub fn expand_lessons_to_sessions(
        &self,
        module_code: &str,
        semester: Semester,
        lessons: &[Lesson],
        calendar: &AcademicCalendar,
    ) -> Vec<DatedSession> {
        expand_lessons(module_code, semester, lessons, calendar)
    }

    /// Fetch a module's timetable and expand it into dated sessions.
    #[instrument(skip(self, calendar), fields(semester = %semester))]
    pub async fn fetch_sessions(
        &self,
        module_code: &str,
        semester: Semester,
        calendar: &AcademicCalendar,
    ) -> Result<Vec<DatedSession>, ClientError> {
        let lessons = self.fetch_timetable(module_code, semester).await?;
        Ok(self.expand_lessons_to_sessions(module_code, semester, &lessons, calendar))
    }

    async fn get_cached<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<T, ClientError> {
        let fetcher = &self.fetcher;
        let record = self
            .cache
            .get_or_fetch(key, || fetcher.fetch(path))
            .await?;
        Ok(record)
    }
}
