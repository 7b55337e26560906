//! Photo viewer state machine
//!
//! Sequences the two-stage load for one lightbox instance:
//!
//! ```text
//! request(id) ──► commit_metadata ──► commit_image
//!   Empty           MetadataLoaded      ImageLoaded
//! ```
//!
//! Each stage hands out a ticket that the caller redeems when its fetch
//! completes. Tickets are consumed on redemption, so a completion can be
//! committed at most once. The record and its resolved source are always
//! written together.

use serde_json::Value;
use tracing::{debug, error};

use crate::{FetchError, FetchPolicy, PhotoId, PhotoRecord, SourceResolver, Viewport};

/// A pending metadata fetch for one id
#[derive(Debug)]
#[must_use = "a metadata request must be committed once its fetch settles"]
pub struct MetadataRequest {
    id: PhotoId,
    generation: u64,
}

impl MetadataRequest {
    pub fn id(&self) -> &PhotoId {
        &self.id
    }
}

/// A pending image preload for one resolved source
#[derive(Debug)]
#[must_use = "an image request must be committed once its fetch settles"]
pub struct ImageRequest {
    source: String,
    revision: u64,
}

impl ImageRequest {
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Loaded {
    record: PhotoRecord,
    source: Option<String>,
}

/// Where the viewer is in the load sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    MetadataLoaded,
    ImageLoaded,
}

/// What the presentation surface should paint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface<'a> {
    pub id: &'a PhotoId,
    pub source: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Empty,
    MetadataLoaded(Loaded),
    ImageLoaded(Loaded),
}

/// State for one mounted lightbox
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoViewer {
    policy: FetchPolicy,
    requested: Option<PhotoId>,
    generation: u64,
    /// Bumped whenever a commit installs a new source
    revision: u64,
    state: State,
}

impl Default for PhotoViewer {
    fn default() -> Self {
        Self::new(FetchPolicy::default())
    }
}

impl PhotoViewer {
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            policy,
            requested: None,
            generation: 0,
            revision: 0,
            state: State::Empty,
        }
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Empty => Phase::Empty,
            State::MetadataLoaded(_) => Phase::MetadataLoaded,
            State::ImageLoaded(_) => Phase::ImageLoaded,
        }
    }

    /// Most recently requested id, which is not necessarily the one on display
    pub fn requested(&self) -> Option<&PhotoId> {
        self.requested.as_ref()
    }

    pub fn record(&self) -> Option<&PhotoRecord> {
        self.loaded().map(|l| &l.record)
    }

    pub fn source(&self) -> Option<&str> {
        self.loaded().and_then(|l| l.source.as_deref())
    }

    /// `None` until a record has been committed.
    pub fn surface(&self) -> Option<Surface<'_>> {
        self.loaded().map(|l| Surface {
            id: l.record.id(),
            source: l.source.as_deref(),
        })
    }

    fn loaded(&self) -> Option<&Loaded> {
        match &self.state {
            State::Empty => None,
            State::MetadataLoaded(l) | State::ImageLoaded(l) => Some(l),
        }
    }

    /// Start loading `id`.
    ///
    /// Returns `None` when `id` is already the most recent request, so a
    /// given id observed once costs one fetch.
    pub fn request(&mut self, id: PhotoId) -> Option<MetadataRequest> {
        if self.requested.as_ref() == Some(&id) {
            return None;
        }
        self.generation += 1;
        self.requested = Some(id.clone());
        Some(MetadataRequest {
            id,
            generation: self.generation,
        })
    }

    /// Commit the outcome of a metadata fetch.
    ///
    /// On success the record and its source (resolved against `viewport`)
    /// replace the current ones in a single step. An image request is
    /// returned only when that step changed the source to a new value.
    /// Failures are logged and leave the state untouched.
    pub fn commit_metadata<R>(
        &mut self,
        request: MetadataRequest,
        outcome: Result<Value, FetchError>,
        viewport: Viewport,
        resolver: &R,
    ) -> Option<ImageRequest>
    where
        R: SourceResolver + ?Sized,
    {
        let MetadataRequest { id, generation } = request;

        let record = match outcome.and_then(|doc| PhotoRecord::tagged(id.clone(), doc)) {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to load photo data: {id}: {e}");
                return None;
            }
        };

        if self.policy == FetchPolicy::LatestRequestWins && generation != self.generation {
            debug!("Discarding stale metadata for {id}");
            return None;
        }

        let source = resolver.resolve(&record, viewport);
        let previous = std::mem::replace(&mut self.state, State::Empty);
        let source_changed = match &previous {
            State::Empty => true,
            State::MetadataLoaded(l) | State::ImageLoaded(l) => l.source != source,
        };

        let loaded = Loaded { record, source };
        self.state = match previous {
            State::ImageLoaded(_) if !source_changed => State::ImageLoaded(loaded),
            _ => State::MetadataLoaded(loaded),
        };

        if !source_changed {
            return None;
        }
        self.revision += 1;
        let source = self.source()?.to_string();
        debug!("Resolved image source for {id}: {source}");
        Some(ImageRequest {
            source,
            revision: self.revision,
        })
    }

    /// Commit a finished image preload.
    ///
    /// Returns the viewport to report to the host, or `None` when the
    /// completion is dropped.
    pub fn commit_image(&mut self, request: ImageRequest, viewport: Viewport) -> Option<Viewport> {
        let current = request.revision == self.revision;
        if !current && self.policy == FetchPolicy::LatestRequestWins {
            debug!("Discarding stale image load for {}", request.source);
            return None;
        }

        if current {
            self.state = match std::mem::replace(&mut self.state, State::Empty) {
                State::MetadataLoaded(l) => State::ImageLoaded(l),
                other => other,
            };
        }
        Some(viewport)
    }
}
