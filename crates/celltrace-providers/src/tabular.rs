use std::io;

use celltrace_types::Token;

use crate::Result;

/// Tokenize tabular cycler rows: the first cell is the token key, the
/// remaining cells are its values. Rows with an empty or missing key
/// cell are skipped. Rows are allowed to vary in width (instrument
/// exports rarely pad short rows).
pub fn extract_tokens_from_csv<R: io::Read>(reader: R) -> Result<Vec<Token>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut tokens = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let Some(key_cell) = record.get(0) else {
            continue;
        };
        let key = key_cell.trim();
        if key.is_empty() {
            continue;
        }
        let values = record
            .iter()
            .skip(1)
            .map(|v| v.trim().to_string())
            .collect();
        tokens.push(Token::new(key, values));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cell_is_key_rest_are_values() {
        let data = "cy,1\nst,1\ndp,0,3.7,0.5\n";
        let tokens = extract_tokens_from_csv(data.as_bytes()).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].key, "dp");
        assert_eq!(tokens[2].values, vec!["0", "3.7", "0.5"]);
    }

    #[test]
    fn skips_rows_with_empty_key_cell() {
        let data = "cy,1\n,stray,row\ndp,0,3.7,0.5\n";
        let tokens = extract_tokens_from_csv(data.as_bytes()).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].key, "dp");
    }

    #[test]
    fn trims_cell_whitespace() {
        let data = "dp, 0 , 3.7 ,0.5\n";
        let tokens = extract_tokens_from_csv(data.as_bytes()).unwrap();
        assert_eq!(tokens[0].values, vec!["0", "3.7", "0.5"]);
    }

    #[test]
    fn tolerates_ragged_row_widths() {
        let data = "de\ncy,7\ndp,0,3.7,0.5,,1.25\n";
        let tokens = extract_tokens_from_csv(data.as_bytes()).unwrap();
        assert_eq!(tokens[0].key, "de");
        assert!(tokens[0].values.is_empty());
        assert_eq!(tokens[2].values.len(), 5);
    }
}
