//! Site footer: brand blurb, link columns, and contact details.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

const CONTACT_EMAIL: &str = "hello@econnecto.in";
const CONTACT_PHONE: &str = "+91-40-1234-5678";

const QUICK_LINKS: &[&str] = &["About Us", "How It Works", "Recyclers", "Contact"];
const POLICY_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "E-Waste Policy 2017", "Compliance"];

/// `tel:` URI for a display-formatted phone number.
fn tel_uri(display: &str) -> String {
    let digits: String = display.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}

fn link_column(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer__column">
            <h4>{heading}</h4>
            <ul>
                {links
                    .iter()
                    .map(|label| view! { <li><a href="#">{*label}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__column footer__brand">
                    <span class="footer__logo">"♻ ECONNECTO"</span>
                    <p>"Sustainable e-waste management for a circular economy in Telangana."</p>
                </div>
                {link_column("Quick Links", QUICK_LINKS)}
                {link_column("Policies", POLICY_LINKS)}
                <div class="footer__column footer__contact">
                    <h4>"Contact"</h4>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    <a href=tel_uri(CONTACT_PHONE)>{CONTACT_PHONE}</a>
                    <span>"Hyderabad, Telangana, India"</span>
                </div>
            </div>
            <div class="footer__legal">
                <p>"© 2025 ECONNECTO. All rights reserved."</p>
                <p>"Committed to sustainable e-waste management and circular economy principles."</p>
            </div>
        </footer>
    }
}
