pub use crate::annotation::{genomic_order, read_cds_features, FeatureRecord};
pub use crate::io::fasta::{read_index, write_ordered, SequenceIndex};
pub use crate::reorder::{reconcile, ReorderSummary, ReorderTask};
