//! Landing links API Handlers
//!
//! Serves the link-in-bio table. Aggregator entries respect the startup
//! visibility toggles; the `isOpen` gate tells the client whether the
//! order buttons should be clickable at all.

use axum::{Json, extract::State};
use serde::Serialize;

use shared::{AggregatorId, LandingLink, LocalizedText};

use crate::core::{AggregatorVisibility, ServerState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksResponse {
    /// Clickability gate for order links, from the status poller
    pub is_open: bool,
    pub links: Vec<LandingLink>,
}

/// GET /api/links - landing page link table
pub async fn list(State(state): State<ServerState>) -> Json<LinksResponse> {
    Json(LinksResponse {
        is_open: state.current_status().is_open,
        links: visible_links(&state.config.aggregators),
    })
}

/// Link table with the visibility toggles applied
fn visible_links(visibility: &AggregatorVisibility) -> Vec<LandingLink> {
    landing_links()
        .into_iter()
        .filter(|link| match link.aggregator {
            Some(id) => visibility.is_visible(id),
            None => true,
        })
        .collect()
}

/// The full link table, in display order
fn landing_links() -> Vec<LandingLink> {
    vec![
        LandingLink {
            id: "hungerstation".into(),
            label: LocalizedText::new("هنقرستيشن", "HungerStation"),
            url: "https://hungerstation.com/sa-en/restaurant/riyadh/malqa/156422".into(),
            deep_link: Some("hungerstation://restaurant/156422".into()),
            icon: Some("/images/LINK_HungerStation.png".into()),
            aggregator: Some(AggregatorId::Hungerstation),
        },
        LandingLink {
            id: "jahez".into(),
            label: LocalizedText::new("جاهز", "Jahez"),
            url: "https://jahez.link/nDKd7jk0QUb".into(),
            deep_link: Some("jahez://nDKd7jk0QUb".into()),
            icon: Some("/images/LINK_Jahez.png".into()),
            aggregator: Some(AggregatorId::Jahez),
        },
        LandingLink {
            id: "keeta".into(),
            label: LocalizedText::new("ذا شيفز", "The Chefz"),
            url: "https://url.mykeeta.com/WCjnfSYz".into(),
            deep_link: Some("keeta://WCjnfSYz".into()),
            icon: Some("/images/LINK_Keeta.png".into()),
            aggregator: Some(AggregatorId::Keeta),
        },
        LandingLink {
            id: "ninja".into(),
            label: LocalizedText::new("نينجا", "Ninja"),
            url: "https://ananinja.com/sa/ar/restaurants/ajdel-41829".into(),
            deep_link: Some("ninja://restaurant/41829".into()),
            icon: Some("/images/LINK_Ninja.png".into()),
            aggregator: Some(AggregatorId::Ninja),
        },
        LandingLink {
            id: "salla".into(),
            label: LocalizedText::new("سلة (متجر إلكتروني)", "Salla (E-commerce)"),
            url: "http://salla.sa/ajdels".into(),
            deep_link: Some("salla://store/ajdels".into()),
            icon: Some("/images/LINK_Salla Logo.png".into()),
            aggregator: None,
        },
        LandingLink {
            id: "menu".into(),
            label: LocalizedText::new("قائمة الطعام", "Digital Menu"),
            url: "#menu".into(),
            deep_link: None,
            icon: Some("/images/Brand Logo.png".into()),
            aggregator: None,
        },
        LandingLink {
            id: "location".into(),
            label: LocalizedText::new("الموقع", "Location"),
            url: "https://maps.app.goo.gl/8E4gu42aSGkqY8X2A".into(),
            deep_link: None,
            icon: Some("/images/LINK_googlemaps.png".into()),
            aggregator: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_links_visible_by_default() {
        let links = visible_links(&AggregatorVisibility::default());
        assert_eq!(links.len(), landing_links().len());
    }

    #[test]
    fn hidden_aggregators_are_filtered_out() {
        let visibility = AggregatorVisibility {
            jahez: false,
            keeta: false,
            ..Default::default()
        };
        let links = visible_links(&visibility);
        assert!(links.iter().all(|l| l.id != "jahez" && l.id != "keeta"));
        // Non-aggregator links are never filtered
        assert!(links.iter().any(|l| l.id == "menu"));
        assert!(links.iter().any(|l| l.id == "location"));
        assert!(links.iter().any(|l| l.id == "salla"));
    }
}
