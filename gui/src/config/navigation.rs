// Static navigation link sets. There is no router; links are plain hrefs.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    #[default]
    Classic,
    Collection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavVariant {
    pub fn links(self) -> Vec<NavLink> {
        let pairs: &[(&'static str, &'static str)] = match self {
            NavVariant::Classic => &[("Home", "/"), ("About", "/about"), ("Contact", "/contact")],
            NavVariant::Collection => &[
                ("Home", "/"),
                ("Search", "/search"),
                ("Collection", "/collection"),
                ("Profile", "/profile"),
            ],
        };
        pairs
            .iter()
            .map(|&(label, href)| NavLink { label, href })
            .collect()
    }
}
