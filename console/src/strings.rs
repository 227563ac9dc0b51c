macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

define_strings! {
    GFF =
        "Path to the tab-delimited annotation file. Only rows of type CDS \
        carrying an ID attribute contribute to the output order.";
    FASTA =
        "Path to the protein FASTA file to reorder. Each record's header \
        token is matched against the annotation ID attributes.";
    OUTPUT =
        "Path for the reordered FASTA file.";
    OUTPUT_DIR =
        "Directory the output file is written into, created recursively \
        when missing. Defaults to the parent of the output path.";
    FORCE =
        "Automatically confirm selected paths.";
    VERBOSE =
        "Increase log verbosity. Repeat for debug and trace output.";
    QUIET =
        "Silence all log output except errors.";
}
