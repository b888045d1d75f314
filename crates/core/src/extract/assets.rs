//! Logo and favicon pass-through.

use dsx_protocol::{Favicon, Logo};

use crate::extract::snapshot::AssetsSnapshot;

pub(crate) fn logo(snapshot: &AssetsSnapshot) -> Option<Logo> {
	snapshot.logo.as_ref().and_then(|raw| {
		if raw.src.is_none() && raw.alt.is_none() {
			return None;
		}
		Some(Logo {
			src: raw.src.clone(),
			alt: raw.alt.clone().filter(|alt| !alt.is_empty()),
		})
	})
}

pub(crate) fn favicons(snapshot: &AssetsSnapshot) -> Vec<Favicon> {
	snapshot
		.favicons
		.iter()
		.map(|raw| Favicon {
			href: raw.href.clone(),
			rel: raw.rel.clone(),
			sizes: raw.sizes.clone().filter(|s| !s.is_empty()),
		})
		.collect()
}
