use crate::site::config::SiteConfig;
use crate::tools::log_message_and_return;
use dto::attendance::Attendance;
use dto::mailto::rsvp_mailto_uri;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};

#[get("/")]
pub async fn index(site: &State<SiteConfig>) -> Template {
    Template::render(
        "index",
        context! {
            title: format!("{} & {}", site.couple().bride(), site.couple().groom()),
            site: site.inner(),
        },
    )
}

/// Script-free rendition of the RSVP form: the browser is redirected to a
/// prefilled `mailto:` URI and the guest's own mail client takes over.
/// The relay endpoint is not involved on this path.
#[get("/rsvp/mailto?<name>&<email>&<attending>&<note>")]
pub async fn rsvp_mailto(
    site: &State<SiteConfig>,
    name: String,
    email: String,
    attending: String,
    note: Option<String>,
) -> Result<Redirect, Status> {
    let attendance = attending.parse::<Attendance>().map_err(
        log_message_and_return("Unknown attendance choice", Status::BadRequest),
    )?;

    Ok(Redirect::to(rsvp_mailto_uri(
        site.rsvp_address(),
        &name,
        &email,
        attendance,
        note.as_deref().unwrap_or_default(),
    )))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            uri: req.uri()
        },
    )
}
