use reqwest::StatusCode;

const API_URL: &str = "https://tinyurl.com/api-create.php";

/// Asks TinyURL for a short form of `long_url`. Any failure, transport
/// errors included, is logged and the original URL comes back unchanged,
/// so callers never lose a link.
pub fn shorten_url(long_url: &str) -> String {
    let api_url = format!("{API_URL}?url={long_url}");
    match reqwest::blocking::get(api_url) {
        Ok(response) => {
            let status = response.status();
            match response.text() {
                Ok(body) => resolve(status, &body, long_url),
                Err(e) => {
                    eprintln!("Error shortening URL: unreadable response: {e}");
                    long_url.to_string()
                }
            }
        }
        Err(e) => {
            eprintln!("Error shortening URL: {e}");
            long_url.to_string()
        }
    }
}

fn resolve(status: StatusCode, body: &str, long_url: &str) -> String {
    if status.is_success() {
        body.trim().to_string()
    } else {
        eprintln!("Error shortening URL: {status}, {body}");
        long_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_returns_short_url() {
        let short = resolve(StatusCode::OK, "http://tiny/x", "https://example.com/long");
        assert_eq!(short, "http://tiny/x");
    }

    #[test]
    fn test_body_is_trimmed() {
        let short = resolve(StatusCode::OK, "http://tiny/x\n", "https://example.com/long");
        assert_eq!(short, "http://tiny/x");
    }

    #[test]
    fn test_non_success_falls_back_to_original() {
        let long = "https://example.com/long";
        let short = resolve(StatusCode::INTERNAL_SERVER_ERROR, "boom", long);
        assert_eq!(short, long);
    }

    #[test]
    fn test_client_error_falls_back_to_original() {
        let long = "https://example.com/long";
        assert_eq!(resolve(StatusCode::BAD_REQUEST, "", long), long);
    }
}
