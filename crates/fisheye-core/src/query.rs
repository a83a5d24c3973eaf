//! Photographer id lookup in the page URL.

use url::Url;

use crate::error::QueryError;
use crate::profile::PhotographerId;

/// Query parameter carrying the photographer id.
pub const ID_PARAM: &str = "id";

/// The raw `id` value from `page_url`'s query string, percent-decoded.
///
/// The first `id` parameter wins. An empty value counts as absent.
pub fn raw_photographer_id(page_url: &Url) -> Result<String, QueryError> {
    page_url
        .query_pairs()
        .find(|(key, _)| key == ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(QueryError::MissingId)
}

/// Read the photographer id from `page_url`'s query string.
///
/// The value is read with [`PhotographerId::from_query_value`], so trailing
/// text after the leading digits is ignored.
pub fn photographer_id(page_url: &Url) -> Result<PhotographerId, QueryError> {
    PhotographerId::from_query_value(&raw_photographer_id(page_url)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn reads_id_parameter() {
        let id = photographer_id(&url("https://fisheye.test/photographer.html?id=243")).unwrap();
        assert_eq!(id, PhotographerId::new(243));
    }

    #[test]
    fn first_id_parameter_wins() {
        let id = photographer_id(&url("https://fisheye.test/p.html?id=7&id=8")).unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn other_parameters_are_ignored() {
        let id = photographer_id(&url("https://fisheye.test/p.html?sort=date&id=82")).unwrap();
        assert_eq!(id.get(), 82);
    }

    #[test]
    fn absent_or_empty_id_is_missing() {
        assert_eq!(
            photographer_id(&url("https://fisheye.test/p.html")),
            Err(QueryError::MissingId)
        );
        assert_eq!(
            photographer_id(&url("https://fisheye.test/p.html?id=")),
            Err(QueryError::MissingId)
        );
        assert_eq!(
            photographer_id(&url("https://fisheye.test/p.html?ID=7")),
            Err(QueryError::MissingId)
        );
    }

    #[test]
    fn non_numeric_id_is_invalid() {
        assert_eq!(
            photographer_id(&url("https://fisheye.test/p.html?id=mimi")),
            Err(QueryError::InvalidId {
                value: "mimi".to_string()
            })
        );
    }

    #[test]
    fn leading_digits_are_the_id() {
        for query in ["id=7abc", "id=7.0", "id=%2B7", "id=%207"] {
            let id = photographer_id(&url(&format!("https://fisheye.test/p.html?{query}")))
                .unwrap();
            assert_eq!(id.get(), 7, "{query}");
        }
    }

    #[test]
    fn raw_value_is_kept_verbatim() {
        assert_eq!(
            raw_photographer_id(&url("https://fisheye.test/p.html?id=%207abc")).unwrap(),
            " 7abc"
        );
        assert_eq!(
            raw_photographer_id(&url("https://fisheye.test/p.html?id=")),
            Err(QueryError::MissingId)
        );
    }

    #[test]
    fn percent_encoded_id_is_decoded() {
        let id = photographer_id(&url("https://fisheye.test/p.html?id=%37")).unwrap();
        assert_eq!(id.get(), 7);
    }
}
