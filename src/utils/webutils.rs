use actix_web::{
    http::header::{q, AcceptLanguage, Header, Preference},
    web, HttpRequest,
};

use crate::types::locale::Locale;

/// Locale asked for by the request, else the app's default, else `en-US`.
pub fn request_locale(req: &HttpRequest) -> Locale {
    preferred_locale(req)
        .or_else(|| req.app_data::<web::Data<Locale>>().map(|d| d.get_ref().clone()))
        .unwrap_or_default()
}

/// Highest ranked `Accept-Language` entry we can use. Ranking keeps header
/// order on equal weights; wildcards and `q=0` entries are skipped.
fn preferred_locale(req: &HttpRequest) -> Option<Locale> {
    let header = AcceptLanguage::parse(req).ok()?;
    let accepted = header
        .0
        .into_iter()
        .filter(|item| item.quality > q(0.0_f32))
        .collect();

    AcceptLanguage(accepted)
        .ranked()
        .into_iter()
        .find_map(|preference| match preference {
            Preference::Specific(tag) => tag.as_str().parse::<Locale>().ok(),
            Preference::Any => None,
        })
}
