use reqwest::Url;

use crate::error::ConfigError;

/// Resolve `<base>/v1/data/<package>/<rule>?metrics=true`.
///
/// `package` may name a nested package with `/` separators
/// (`example/authz`). Any query already present on `base` is replaced.
///
/// # Errors
///
/// Returns an error when `base` is not an http(s) URL or a policy segment is
/// empty.
pub fn build_endpoint(base: &str, package: &str, rule: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(base).map_err(|err| ConfigError::InvalidUrl {
        url: base.to_owned(),
        source: err,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            url: base.to_owned(),
        });
    }

    let package_segments: Vec<&str> = package
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    if package_segments.is_empty() {
        return Err(ConfigError::EmptyPolicySegment { field: "package" });
    }
    let rule = rule.trim();
    if rule.is_empty() {
        return Err(ConfigError::EmptyPolicySegment { field: "rule" });
    }

    url.path_segments_mut()
        .map_err(|()| ConfigError::UrlCannotBeBase {
            url: base.to_owned(),
        })?
        .pop_if_empty()
        .extend(["v1", "data"])
        .extend(package_segments)
        .push(rule);

    url.set_query(None);
    url.query_pairs_mut().append_pair("metrics", "true");
    Ok(url)
}
