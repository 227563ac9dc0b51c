use std::io::BufRead;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;

/// Column layout of a GFF-like annotation row.
const GFF_FIELD_NUM: usize = 9;
const TYPE_COL: usize = 2;
const START_COL: usize = 3;
const ATTR_COL: usize = 8;

/// Feature type whose coordinates define the output order.
const ORDERING_TYPE: &str = "CDS";

/// One qualifying annotation row, reduced to its join key and start
/// coordinate. Consumed by [`genomic_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub id:    String,
    pub start: u64,
}

/// Extract coding-sequence features from a line-oriented annotation stream.
///
/// Comment (`#`) and blank lines are skipped, as are rows with fewer than
/// nine tab-separated fields and rows of any type other than `CDS`. A CDS
/// row whose attribute field carries no `ID=` pair contributes nothing.
/// A CDS row with a non-numeric start coordinate fails the whole run.
///
/// Features are returned in file order; sorting is [`genomic_order`]'s job.
pub fn read_cds_features<R: BufRead>(input: R) -> Result<Vec<FeatureRecord>> {
    let mut features = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read annotation line {}", idx + 1))?;
        if let Some(feature) = parse_feature_line(&line, idx + 1)? {
            features.push(feature);
        }
    }
    debug!("Extracted {} CDS features", features.len());
    Ok(features)
}

fn parse_feature_line(
    line: &str,
    line_num: usize,
) -> Result<Option<FeatureRecord>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields = line.split('\t').collect_vec();
    if fields.len() < GFF_FIELD_NUM {
        return Ok(None);
    }
    if fields[TYPE_COL] != ORDERING_TYPE {
        return Ok(None);
    }

    let start: u64 = fields[START_COL].parse().with_context(|| {
        format!(
            "Invalid start coordinate '{}' in annotation line {}",
            fields[START_COL], line_num
        )
    })?;

    Ok(attribute_id(fields[ATTR_COL]).map(|id| FeatureRecord { id, start }))
}

/// Value of the first `ID=` pair in a semicolon-delimited attribute list.
fn attribute_id(attributes: &str) -> Option<String> {
    attributes
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "ID")
        .map(|(_, value)| value.to_string())
}

/// Resolve features into the canonical ordered identifier list.
///
/// The sort is stable, so features sharing a start coordinate keep their
/// input order. Duplicate identifiers are passed through as-is.
pub fn genomic_order(mut features: Vec<FeatureRecord>) -> Vec<String> {
    features.sort_by_key(|feature| feature.start);
    features
        .into_iter()
        .map(|feature| feature.id)
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cds_line(start: &str, attrs: &str) -> String {
        format!("chr1\ttest\tCDS\t{}\t{}\t.\t+\t0\t{}", start, start, attrs)
    }

    #[test]
    fn skips_comments_and_blanks() {
        let input = "# header\n\n   \n";
        let features = read_cds_features(input.as_bytes()).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn skips_short_and_non_cds_rows() {
        let input = format!(
            "chr1\ttest\tCDS\t100\n{}\n{}",
            "chr1\ttest\tgene\t100\t200\t.\t+\t.\tID=g1",
            cds_line("100", "ID=g1")
        );
        let features = read_cds_features(input.as_bytes()).unwrap();
        assert_eq!(features, vec![FeatureRecord {
            id:    "g1".to_string(),
            start: 100,
        }]);
    }

    #[test]
    fn takes_first_id_pair() {
        let line = cds_line("100", "Parent=t1;ID=g1;ID=g2;Name=first");
        let features = read_cds_features(line.as_bytes()).unwrap();
        assert_eq!(features[0].id, "g1");
    }

    #[test]
    fn id_value_keeps_text_after_first_equals() {
        let line = cds_line("100", "ID=g1=alt");
        let features = read_cds_features(line.as_bytes()).unwrap();
        assert_eq!(features[0].id, "g1=alt");
    }

    #[test]
    fn cds_without_id_contributes_nothing() {
        let line = cds_line("100", "Parent=t1;Name=orphan");
        let features = read_cds_features(line.as_bytes()).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn non_numeric_start_is_fatal() {
        let line = cds_line("one", "ID=g1");
        let result = read_cds_features(line.as_bytes());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("start coordinate"));
    }

    #[test]
    fn orders_by_start() {
        let features = vec![
            FeatureRecord {
                id:    "g3".to_string(),
                start: 300,
            },
            FeatureRecord {
                id:    "g1".to_string(),
                start: 100,
            },
            FeatureRecord {
                id:    "g2".to_string(),
                start: 200,
            },
        ];
        assert_eq!(genomic_order(features), vec!["g1", "g2", "g3"]);
    }

    #[test]
    fn equal_starts_keep_input_order() {
        let features = vec![
            FeatureRecord {
                id:    "b".to_string(),
                start: 100,
            },
            FeatureRecord {
                id:    "a".to_string(),
                start: 100,
            },
            FeatureRecord {
                id:    "c".to_string(),
                start: 50,
            },
        ];
        assert_eq!(genomic_order(features), vec!["c", "b", "a"]);
    }
}
