use crate::dataset::Dataset;
use crate::format::WireFormat;
use log::info;
use std::io::Write;

pub(crate) fn banner(tool: &str) {
    info!("{} (wirebench v{}) started", tool, env!("CARGO_PKG_VERSION"));
}

/// Writes one `<Format> size: <bytes>` line per encoding.
pub fn write_size_report<W: Write>(out: &mut W, dataset: &Dataset) -> std::io::Result<()> {
    for format in WireFormat::ALL {
        writeln!(out, "{} size: {}", display_name(format), dataset.data(format).len())?;
    }
    Ok(())
}

fn display_name(format: WireFormat) -> &'static str {
    match format {
        WireFormat::Protobuf => "Protobuf",
        WireFormat::Thrift => "Thrift",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;

    #[test]
    fn test_size_report() {
        let dataset = Dataset::bundle(GeneratorConfig::new(), vec![0; 12], vec![0; 30]);
        let mut out = Vec::new();
        write_size_report(&mut out, &dataset).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Protobuf size: 12\nThrift size: 30\n"
        );
    }
}
