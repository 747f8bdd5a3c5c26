//! Page manifest handed to the static site generator.
//!
//! The core decides which pages exist; templating and routing belong to the
//! web framework that consumes the manifest.

use crate::registry::{ItemKind, Registry};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Page {
    /// One listing page per kind
    Listing {
        kind: ItemKind,
        route: String,
        title: String,
        items: usize,
    },
    /// One detail page per item
    Detail {
        kind: ItemKind,
        id: String,
        route: String,
        title: String,
    },
}

impl Page {
    pub fn route(&self) -> &str {
        match self {
            Page::Listing { route, .. } | Page::Detail { route, .. } => route,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageManifest {
    pub pages: Vec<Page>,
}

impl PageManifest {
    /// Listing pages in kind order, then detail pages in registry order.
    /// Every kind gets a listing page, even with no items.
    pub fn build(registry: &Registry) -> Self {
        let listings = registry.counts().into_iter().map(|(kind, items)| Page::Listing {
            kind,
            route: format!("/{}", kind.plural()),
            title: kind.title().to_string(),
            items,
        });

        let details = registry.all().iter().map(|item| Page::Detail {
            kind: item.kind,
            id: item.id().to_string(),
            route: format!("/items/{}/{}", item.kind, item.id()),
            title: item.name().to_string(),
        });

        Self {
            pages: listings.chain(details).collect(),
        }
    }

    pub fn listings(&self) -> impl Iterator<Item = &Page> {
        self.pages
            .iter()
            .filter(|page| matches!(page, Page::Listing { .. }))
    }

    pub fn details(&self) -> impl Iterator<Item = &Page> {
        self.pages
            .iter()
            .filter(|page| matches!(page, Page::Detail { .. }))
    }
}
