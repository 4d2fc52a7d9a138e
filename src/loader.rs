use std::fmt::{self, Display};

use log::{debug, error};
use serde::Deserialize;

use crate::transport::{Transport, TransportError};
use crate::types::{Article, City, Package, RecordId, Resource, SeedRecord};

#[derive(Debug)]
pub enum SubmitError {
    Transport(TransportError),
    //  the backend said 201 but the body had no usable id
    Decode(serde_json::Error),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Transport(e) => write!(f, "{}", e),
            SubmitError::Decode(e) => write!(f, "invalid response body: {}", e),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<TransportError> for SubmitError {
    fn from(e: TransportError) -> Self {
        SubmitError::Transport(e)
    }
}

#[derive(Deserialize, Debug)]
struct CreatedRecord {
    id: RecordId,
}

/**
 * What happened to a single record
 */
#[derive(Debug, PartialEq)]
enum Outcome {
    Created(Option<RecordId>),
    Rejected(u16),
}

/**
 * Insertion ordered mapping of city name to the id the backend assigned it.
 * Re-inserting a name keeps its original position.
 */
#[derive(Debug, Default)]
pub struct CityIndex {
    entries: Vec<(String, RecordId)>,
}

impl CityIndex {
    pub fn insert(&mut self, name: &str, id: RecordId) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = id,
            None => self.entries.push((name.to_string(), id)),
        }
    }

    pub fn nth(&self, position: usize) -> Option<RecordId> {
        self.entries.get(position).map(|(_, id)| *id)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<RecordId> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub failed: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub cities: Tally,
    pub articles: Tally,
    pub packages: Tally,
}

impl SeedReport {
    fn tally_mut(&mut self, resource: Resource) -> &mut Tally {
        match resource {
            Resource::Cities => &mut self.cities,
            Resource::Articles => &mut self.articles,
            Resource::Packages => &mut self.packages,
        }
    }

    pub fn tally(&self, resource: Resource) -> Tally {
        match resource {
            Resource::Cities => self.cities,
            Resource::Articles => self.articles,
            Resource::Packages => self.packages,
        }
    }
}

impl Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for resource in Resource::ALL {
            let tally = self.tally(resource);
            writeln!(
                f,
                "   {}: {} created, {} failed",
                resource, tally.created, tally.failed
            )?;
        }
        Ok(())
    }
}

/**
 * The console line printed for each submitted record
 */
fn status_line(noun: &str, label: &str, outcome: &Result<Outcome, SubmitError>) -> String {
    match outcome {
        Ok(Outcome::Created(_)) => format!("   ✅ Created {}: {}", noun, label),
        Ok(Outcome::Rejected(status)) => {
            format!("   ❌ Failed to create {}: {} - {}", noun, label, status)
        }
        Err(e) => format!("   ❌ Error creating {} {}: {}", noun, label, e),
    }
}

pub struct Loader<T: Transport> {
    transport: T,
    base_url: String,
    cities: CityIndex,
    report: SeedReport,
}

impl<T: Transport> Loader<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            cities: CityIndex::default(),
            report: SeedReport::default(),
        }
    }

    pub fn cities(&self) -> &CityIndex {
        &self.cities
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /**
     * Posts the records in order. The record at position i is linked to the
     * i-th created city when there is one.
     */
    async fn submit_all<R: SeedRecord>(&mut self, records: Vec<R>) {
        for (i, mut record) in records.into_iter().enumerate() {
            if let Some(city) = self.cities.nth(i) {
                record.attach_city(city);
            }
            self.submit_one(record).await;
        }
    }

    async fn submit_one<R: SeedRecord>(&mut self, record: R) {
        let resource = record.resource();
        let noun = resource.noun();
        let label = record.label().to_string();

        let outcome = self.post(&record).await;
        println!("{}", status_line(noun, &label, &outcome));
        match outcome {
            Ok(Outcome::Created(id)) => {
                if let Some(id) = id {
                    self.cities.insert(&label, id);
                }
                debug!("Created {} {:?} with id {:?}", noun, label, id);
                self.report.tally_mut(resource).created += 1;
            }
            Ok(Outcome::Rejected(status)) => {
                error!("Backend rejected {} {:?} with status {}", noun, label, status);
                self.report.tally_mut(resource).failed += 1;
            }
            Err(e) => {
                error!("Failed to submit {} {:?}: {}", noun, label, e);
                self.report.tally_mut(resource).failed += 1;
            }
        }
    }

    async fn post<R: SeedRecord>(&self, record: &R) -> Result<Outcome, SubmitError> {
        let resource = record.resource();
        let url = format!("{}{}", self.base_url, resource.path());
        let reply = self.transport.post_json(&url, record).await?;
        if reply.status != 201 {
            return Ok(Outcome::Rejected(reply.status));
        }
        //  only cities are referenced later, so only their ids are read
        if resource != Resource::Cities {
            return Ok(Outcome::Created(None));
        }
        let created: CreatedRecord =
            serde_json::from_str(&reply.body).map_err(SubmitError::Decode)?;
        Ok(Outcome::Created(Some(created.id)))
    }

    pub async fn run(
        &mut self,
        cities: Vec<City>,
        articles: Vec<Article>,
        packages: Vec<Package>,
    ) -> SeedReport {
        println!("\n📍 Creating sample cities...");
        self.submit_all(cities).await;

        println!("\n📝 Creating sample articles...");
        self.submit_all(articles).await;

        println!("\n📦 Creating sample packages...");
        self.submit_all(packages).await;

        self.report.clone()
    }
}
