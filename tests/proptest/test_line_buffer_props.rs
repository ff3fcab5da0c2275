//! Property-based tests for stream line reassembly

use proptest::prelude::*;
use serialview::monitor::StreamLineBuffer;

proptest! {
    #[test]
    fn test_buffer_handles_any_text(s in "\\PC{0,500}") {
        let mut buffer = StreamLineBuffer::new();
        let _ = buffer.append(&s);
        // Should not panic on any text
    }

    #[test]
    fn test_single_delimiter_yields_one_line(
        head in "[^\n]{0,50}",
        tail in "[^\n]{0,50}",
        split in 0usize..100,
    ) {
        let text = format!("{}\n{}", head, tail);
        let chars: Vec<char> = text.chars().collect();
        let split = split.min(chars.len());
        let first: String = chars[..split].iter().collect();
        let second: String = chars[split..].iter().collect();

        let mut buffer = StreamLineBuffer::new();
        let mut lines = Vec::new();
        lines.extend(buffer.append(&first));
        lines.extend(buffer.append(&second));

        prop_assert_eq!(lines, vec![format!("{}\n", head)]);
        prop_assert_eq!(buffer.pending(), tail.as_str());
    }

    #[test]
    fn test_at_most_one_line_per_append(
        records in prop::collection::vec("[a-z]{0,10}", 2..10),
    ) {
        let mut buffer = StreamLineBuffer::new();
        let data = records.join("\n") + "\n";

        let first = buffer.append(&data);
        prop_assert_eq!(first, Some(format!("{}\n", records[0])));

        // Each later empty append releases exactly the next queued record
        for record in &records[1..] {
            prop_assert_eq!(buffer.append(""), Some(format!("{}\n", record)));
        }
        prop_assert_eq!(buffer.append(""), None);
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn test_concatenation_is_preserved(
        fragments in prop::collection::vec("[a-z\n]{0,20}", 0..20),
    ) {
        let mut buffer = StreamLineBuffer::new();
        let mut emitted = String::new();

        for fragment in &fragments {
            if let Some(line) = buffer.append(fragment) {
                prop_assert!(line.ends_with('\n'));
                prop_assert_eq!(line.matches('\n').count(), 1);
                emitted.push_str(&line);
            }
        }
        while let Some(line) = buffer.append("") {
            emitted.push_str(&line);
        }

        // Nothing is lost or reordered, and no delimiter is left behind
        prop_assert_eq!(format!("{}{}", emitted, buffer.pending()), fragments.concat());
        prop_assert!(!buffer.has_complete_line());
    }
}
