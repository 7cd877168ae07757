//! Firebase Storage REST client.
//!
//! Lists the bucket root, reads object metadata and resolves tokenized
//! download URLs through the public `v0` JSON API.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

use super::source::{ObjectMetadata, ObjectStore};
use crate::error::GalleryError;
use crate::options::CatalogOptions;

const API_ROOT: &str = "https://firebasestorage.googleapis.com/v0/b/";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    #[serde(default)]
    items: Vec<ListItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListItem {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectResource {
    name: String,
    content_type: Option<String>,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
    download_tokens: Option<String>,
}

/// A Firebase Storage bucket accessed over HTTPS.
///
/// The catalog loader asks for an object's URL and then its metadata; both
/// come from the same resource, so the last fetched resource is kept until
/// the second lookup consumes it.
pub struct FirebaseStorage {
    agent: ureq::Agent,
    bucket: String,
    last: RefCell<Option<(String, ObjectResource)>>,
}

impl FirebaseStorage {
    /// Client for `bucket`. A `gs://` prefix is accepted and stripped.
    #[must_use]
    pub fn new(bucket: &str) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            bucket: bucket.strip_prefix("gs://").unwrap_or(bucket).to_owned(),
            last: RefCell::new(None),
        }
    }

    /// Client for the bucket named in `options`.
    pub fn from_options(options: &CatalogOptions) -> Result<Self, GalleryError> {
        Ok(Self::new(options.require_bucket()?))
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// `…/v0/b/{bucket}/o` with optional trailing object segment.
    fn object_url(&self, name: Option<&str>) -> Result<Url, GalleryError> {
        let mut url = Url::parse(API_ROOT)
            .map_err(|e| GalleryError::Fetch(e.to_string()))?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                GalleryError::Fetch("storage URL cannot be a base".to_owned())
            })?;
            let _ = segments.pop_if_empty().push(&self.bucket).push("o");
            if let Some(name) = name {
                let _ = segments.push(name);
            }
        }
        Ok(url)
    }

    fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &Url,
    ) -> Result<T, GalleryError> {
        log::debug!("GET {url}");
        let body = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| GalleryError::Fetch(format!("{url}: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| GalleryError::Fetch(format!("{url}: {e}")))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn resource(&self, name: &str) -> Result<ObjectResource, GalleryError> {
        self.cached_resource(name, || {
            self.get_json(&self.object_url(Some(name))?)
        })
    }

    /// Serve `name` from the one-entry cache, calling `fetch` on a miss.
    /// A hit empties the cache.
    fn cached_resource(
        &self,
        name: &str,
        fetch: impl FnOnce() -> Result<ObjectResource, GalleryError>,
    ) -> Result<ObjectResource, GalleryError> {
        let mut last = self.last.borrow_mut();
        if let Some((cached, resource)) = last.take() {
            if cached == name {
                return Ok(resource);
            }
        }
        let resource = fetch()?;
        *last = Some((name.to_owned(), resource.clone()));
        Ok(resource)
    }
}

impl ObjectStore for FirebaseStorage {
    type Object = String;

    fn list(&self) -> Result<Vec<String>, GalleryError> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut url = self.object_url(None)?;
            {
                let mut query = url.query_pairs_mut();
                let _ = query.append_pair("delimiter", "/");
                if let Some(token) = &page_token {
                    let _ = query.append_pair("pageToken", token);
                }
            }
            let page: ListPage = self.get_json(&url)?;
            names.extend(page.items.into_iter().map(|item| item.name));
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(names)
    }

    fn resolve_url(&self, object: &String) -> Result<String, GalleryError> {
        let resource = self.resource(object)?;
        let mut url = self.object_url(Some(&resource.name))?;
        {
            let mut query = url.query_pairs_mut();
            let _ = query.append_pair("alt", "media");
            let token = resource
                .download_tokens
                .as_deref()
                .and_then(|tokens| tokens.split(',').next())
                .filter(|token| !token.is_empty());
            if let Some(token) = token {
                let _ = query.append_pair("token", token);
            }
        }
        Ok(url.into())
    }

    fn metadata(&self, object: &String) -> Result<ObjectMetadata, GalleryError> {
        let resource = self.resource(object)?;
        Ok(ObjectMetadata {
            name: resource.name,
            content_type: resource.content_type,
            custom: resource.metadata,
        })
    }
}

impl std::fmt::Debug for FirebaseStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseStorage")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_encodes_name_as_one_segment() {
        let storage = FirebaseStorage::new("gs://demo.appspot.com");
        assert_eq!(storage.bucket(), "demo.appspot.com");
        let url = storage.object_url(Some("photos/a b.jpg")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://firebasestorage.googleapis.com/v0/b/demo.appspot.com/o/photos%2Fa%20b.jpg"
        );
    }

    #[test]
    fn from_options_requires_a_bucket() {
        let mut options = CatalogOptions::default();
        assert!(FirebaseStorage::from_options(&options).is_err());
        options.bucket = "gs://demo.appspot.com".to_owned();
        let storage = FirebaseStorage::from_options(&options).unwrap();
        assert_eq!(storage.bucket(), "demo.appspot.com");
    }

    #[test]
    fn resource_is_fetched_once_per_url_and_metadata_pair() {
        let storage = FirebaseStorage::new("demo");
        let fetches = std::cell::Cell::new(0);
        let fetch = |name: &str| -> Result<ObjectResource, GalleryError> {
            fetches.set(fetches.get() + 1);
            Ok(ObjectResource {
                name: name.to_owned(),
                content_type: None,
                metadata: BTreeMap::new(),
                download_tokens: None,
            })
        };

        for _ in 0..2 {
            let a = storage.cached_resource("a.jpg", || fetch("a.jpg")).unwrap();
            assert_eq!(a.name, "a.jpg");
        }
        assert_eq!(fetches.get(), 1);

        let _ = storage.cached_resource("b.jpg", || fetch("b.jpg")).unwrap();
        let _ = storage.cached_resource("a.jpg", || fetch("a.jpg")).unwrap();
        assert_eq!(fetches.get(), 3);
    }

    #[test]
    fn failed_fetch_is_not_cached() {
        let storage = FirebaseStorage::new("demo");
        let result = storage.cached_resource("a.jpg", || {
            Err(GalleryError::Fetch("offline".to_owned()))
        });
        assert!(result.is_err());
        assert!(storage.last.borrow().is_none());
    }

    #[test]
    fn list_page_parses() {
        let page: ListPage = serde_json::from_str(
            r#"{"prefixes": [], "items": [{"name": "a.jpg", "bucket": "b"}],
                "nextPageToken": "abc"}"#,
        )
        .unwrap();
        assert_eq!(page.items[0].name, "a.jpg");
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn object_resource_parses_custom_metadata() {
        let resource: ObjectResource = serde_json::from_str(
            r#"{"name": "a.jpg", "contentType": "image/jpeg",
                "metadata": {"sphere_x": "0.1", "sphere_y": "0.2",
                             "sphere_z": "0.3"},
                "downloadTokens": "t1,t2"}"#,
        )
        .unwrap();
        assert_eq!(resource.content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(resource.metadata.len(), 3);
        assert_eq!(resource.download_tokens.as_deref(), Some("t1,t2"));
    }
}
