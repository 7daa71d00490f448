//! Askama template structs for the rendered pages.

use askama::Template;

use folio_core::{Project, Service, Skills};

/// Home page template.
///
/// Binds the three catalogs under the names the template expects
/// (`projects`, `skills`, `services`). Borrows from the shared catalog so
/// rendering copies nothing.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate<'a> {
    pub projects: &'a [Project],
    pub skills: &'a Skills,
    pub services: &'a [Service],
}
