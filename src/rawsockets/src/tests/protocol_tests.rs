#[cfg(test)]
pub mod protocol_tests {
    use std::thread;

    use super::super::setup;
    use crate::protocols::*;
    use sysdefs::data::PROTOCOL_ALIAS_SLOTS;

    // Minimal containers can ship without a protocol database; the lookups
    // that depend on its contents only run when it has entries.
    fn database_available() -> bool {
        !list_all().is_empty()
    }

    #[test]
    pub fn ut_by_number_out_of_range() {
        let _thelock = setup::lock_and_init();
        assert_eq!(by_number(-1), None);
    }

    #[test]
    pub fn ut_by_name_unknown() {
        let _thelock = setup::lock_and_init();
        assert_eq!(by_name("no-such-protocol"), None);
        assert_eq!(by_name("tcp\0udp"), None);
    }

    #[test]
    pub fn ut_tcp_lookup() {
        let _thelock = setup::lock_and_init();
        if !database_available() {
            return;
        }

        let tcp = by_name("tcp").unwrap();
        assert_eq!(tcp.name, "tcp");
        assert_eq!(tcp.number, 6);
        assert!(tcp.aliases.len() >= PROTOCOL_ALIAS_SLOTS);

        let same = by_number(6).unwrap();
        assert_eq!(same, tcp);
    }

    #[test]
    pub fn ut_list_all_records() {
        let _thelock = setup::lock_and_init();
        let all = list_all();
        for record in &all {
            assert!(!record.name.is_empty());
            assert!(record.aliases.len() >= PROTOCOL_ALIAS_SLOTS);
        }
        if !all.is_empty() {
            assert!(all.iter().any(|record| record.number == 17));
        }
    }

    #[test]
    pub fn ut_list_all_repeatable() {
        let _thelock = setup::lock_and_init();
        assert_eq!(list_all(), list_all());
    }

    #[test]
    pub fn ut_concurrent_enumeration() {
        let _thelock = setup::lock_and_init();
        let expected = list_all();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                thread::spawn(move || {
                    if i % 2 == 0 {
                        list_all()
                    } else {
                        // interleave point lookups with the enumerations
                        let _ = by_number(6);
                        let _ = by_name("udp");
                        list_all()
                    }
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
