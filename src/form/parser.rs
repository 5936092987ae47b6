use axum::http::HeaderMap;
use bytes::Bytes;

use super::FormData;

/// Parse a form body based on its Content-Type header.
///
/// Bodies that are not form encoded yield no fields, so every field of the
/// form reports itself as missing.
pub async fn parse_body(headers: &HeaderMap, body: Bytes) -> Result<FormData, String> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    // Media types are case-insensitive; the multipart boundary is not.
    let media_type = content_type.to_ascii_lowercase();

    if media_type.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(&body)
    } else if media_type.contains("multipart/form-data") {
        parse_multipart(content_type, body).await
    } else {
        Ok(FormData::new())
    }
}

/// Repeated keys keep the last value.
pub fn parse_form_urlencoded(body: &[u8]) -> Result<FormData, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    Ok(form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}

/// Parse multipart form data using multer. File parts are skipped.
async fn parse_multipart(content_type: &str, body: Bytes) -> Result<FormData, String> {
    let boundary =
        multer::parse_boundary(content_type).map_err(|_| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut data = FormData::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        data.insert(name, value);
    }

    Ok(data)
}
