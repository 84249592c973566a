use bstr::ByteSlice;
use topo_hash::ObjectId;

/// Split a decompressed loose object into its type name and content.
///
/// A buffer with no NUL byte has no recognisable header; the whole buffer is
/// returned as content with an empty type.
pub(crate) fn split_header(raw: &[u8]) -> (&[u8], &[u8]) {
    match raw.find_byte(0) {
        Some(nul) => {
            let header = &raw[..nul];
            let kind = header.split_str(" ").next().unwrap_or_default();
            (kind, &raw[nul + 1..])
        }
        None => (b"", raw),
    }
}

/// Extract the `parent` ids declared in a commit's header block.
///
/// Header lines (everything before the first empty line) are sorted by their
/// raw bytes first, so a commit that lists its parents out of order still
/// yields them in a stable order. Lines whose field name is not exactly
/// `parent` are ignored; a commit with an unexpected layout simply has no
/// parents.
///
/// On a malformed parent value, the offending text is returned as the error.
pub fn commit_parents(content: &[u8]) -> Result<Vec<ObjectId>, String> {
    let mut headers: Vec<&[u8]> = content.lines().take_while(|line| !line.is_empty()).collect();
    headers.sort_unstable();

    let mut parents = Vec::new();
    for line in headers {
        let Some((field, value)) = line.split_once_str(" ") else {
            continue;
        };
        if field != b"parent" {
            continue;
        }
        let token = value.fields().next().unwrap_or_default();
        let parsed = token
            .to_str()
            .ok()
            .and_then(|hex| ObjectId::from_hex(hex).ok())
            .ok_or_else(|| format!("bad parent line: {}", line.as_bstr()))?;
        parents.push(parsed);
    }
    Ok(parents)
}
