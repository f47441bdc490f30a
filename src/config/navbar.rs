use crate::config::APP_NAME;
use crate::domain::{NavbarConfig, NavbarItem};

pub fn navbar_config() -> NavbarConfig {
    NavbarConfig {
        site_name: APP_NAME.to_string(),
        items: vec![
            NavbarItem::link("Home", "/"),
            NavbarItem::group("Calculators", calculators()),
        ],
    }
}

fn calculators() -> Vec<NavbarItem> {
    vec![NavbarItem::link("Day/night import", "/calc/day-night-import")]
}

/// Every leaf link under the calculators menu, as (label, url).
pub fn calculator_links() -> Vec<(String, String)> {
    fn collect(items: &[NavbarItem], out: &mut Vec<(String, String)>) {
        for item in items {
            if item.has_children() {
                collect(&item.children, out);
            } else if let (false, Some(url)) = (item.is_divider(), &item.url) {
                out.push((item.label.clone(), url.clone()));
            }
        }
    }

    let mut links = Vec::new();
    collect(&calculators(), &mut links);
    links
}
