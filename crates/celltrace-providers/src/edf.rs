use celltrace_types::Token;

/// Tokenize the line-oriented EDF format: one token per non-empty
/// line, whitespace-split, first field is the key. Values stay raw
/// strings; interpretation belongs to the assembler.
pub fn extract_tokens_from_edf(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let Some(key) = parts.next() else {
            continue;
        };
        tokens.push(Token::new(key, parts.map(str::to_string).collect()));
    }
    tokens
}
