#[cfg(test)]
mod test {
    use crate::generator::{generate_record, FieldGenerator, GeneratorConfig, RecordBuilder};
    use crate::record::Record;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(string: u32, repeated: u32, depth: u32, children: u32) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_string_field_size(string)
            .with_repeated_field_size(repeated)
            .with_message_depth(depth)
            .with_children_size(children)
    }

    fn assert_shape(record: &Record, config: &GeneratorConfig) {
        let string_size = config.string_field_size as usize;
        let repeated = config.repeated_field_size as usize;

        record.visit(&mut |node: &Record| {
            assert_eq!(node.string_value.len(), string_size);
            assert_eq!(node.bytes_value.len(), string_size);
            assert!(node.string_value.chars().all(|c| c.is_ascii_lowercase()));
            assert!(node.bytes_value.iter().all(|b| b.is_ascii_lowercase()));

            assert_eq!(node.repeated_bool_value.len(), repeated);
            assert_eq!(node.repeated_int32_value.len(), repeated);
            assert_eq!(node.repeated_int64_value.len(), repeated);
            assert_eq!(node.repeated_string_value.len(), repeated);
            assert_eq!(node.repeated_bytes_value.len(), repeated);
            for value in &node.repeated_string_value {
                assert_eq!(value.len(), string_size);
            }
            for value in &node.repeated_bytes_value {
                assert_eq!(value.len(), string_size);
            }

            if !node.is_leaf() {
                assert_eq!(node.children.len(), config.children_size as usize);
            }
        });
    }

    #[test]
    fn test_small_tree_scenario() {
        let config = config(5, 2, 1, 2);
        let record = generate_record(&config, 42);

        assert_eq!(record.node_count(), 3);
        assert_eq!(record.children.len(), 2);
        assert_eq!(record.depth(), 1);
        assert!(record.children.iter().all(Record::is_leaf));
        assert_shape(&record, &config);
    }

    #[test]
    fn test_zero_children_gives_single_node() {
        for depth in [0, 1, 4, 50] {
            let config = config(3, 1, depth, 0);
            let record = generate_record(&config, 9);
            assert_eq!(record.node_count(), 1, "depth {}", depth);
            assert!(record.is_leaf());
        }
    }

    #[test]
    fn test_node_count_is_geometric_sum() {
        for (depth, children) in [(0, 3), (1, 1), (2, 3), (3, 2), (4, 1)] {
            let config = config(1, 1, depth, children);
            let record = generate_record(&config, 5);
            assert_eq!(record.node_count(), config.expected_node_count());
            assert_eq!(record.depth(), depth);
        }
    }

    #[test]
    fn test_shape_for_various_configs() {
        for config in [config(0, 0, 0, 0), config(8, 0, 2, 2), config(0, 4, 1, 3), config(16, 3, 2, 2)] {
            let record = generate_record(&config, 77);
            assert_shape(&record, &config);
        }
    }

    #[test]
    fn test_zero_config_yields_empty_values() {
        let record = generate_record(&config(0, 0, 0, 0), 1);
        assert!(record.string_value.is_empty());
        assert!(record.bytes_value.is_empty());
        assert!(record.repeated_bool_value.is_empty());
        assert!(record.children.is_empty());
    }

    #[test]
    fn test_same_seed_same_tree() {
        let config = config(6, 3, 2, 2);
        assert_eq!(generate_record(&config, 1234), generate_record(&config, 1234));
        assert_ne!(generate_record(&config, 1234), generate_record(&config, 4321));
    }

    #[test]
    fn test_fields_are_drawn_singular_then_repeated() {
        let config = config(2, 2, 0, 0);
        let record = generate_record(&config, 99);

        let mut fields = FieldGenerator::new(StdRng::seed_from_u64(99));
        assert_eq!(record.bool_value, fields.generate_bool());
        assert_eq!(record.repeated_bool_value[0], fields.generate_bool());
        assert_eq!(record.repeated_bool_value[1], fields.generate_bool());
        assert_eq!(record.int32_value, fields.generate_int32());
        assert_eq!(record.repeated_int32_value[0], fields.generate_int32());
        assert_eq!(record.repeated_int32_value[1], fields.generate_int32());
        assert_eq!(record.int64_value, fields.generate_int64());
    }

    #[test]
    fn test_builder_depth_argument() {
        let config = config(1, 0, 5, 2);
        let mut builder = RecordBuilder::new(&config, FieldGenerator::new(StdRng::seed_from_u64(0)));

        let leaf = builder.build(0);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.string_value.len(), 1);

        let shallow = builder.build(1);
        assert_eq!(shallow.node_count(), 3);
    }
}
