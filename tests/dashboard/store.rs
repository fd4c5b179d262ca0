use earlybird::SymbolStore;

#[test]
fn missing_store_file_reads_as_nothing_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let store = SymbolStore::new(dir.path().join("lastSymbol.txt"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = SymbolStore::new(dir.path().join("lastSymbol.txt"));

    store.save("MSFT").unwrap();
    assert_eq!(store.load().unwrap(), Some("MSFT".to_string()));

    // Saving again overwrites, never appends.
    store.save("AAPL").unwrap();
    assert_eq!(store.load().unwrap(), Some("AAPL".to_string()));
}

#[test]
fn whitespace_only_file_reads_as_nothing_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lastSymbol.txt");
    std::fs::write(&path, "\n  \n").unwrap();

    let store = SymbolStore::new(&path);
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn surrounding_whitespace_is_trimmed_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lastSymbol.txt");
    std::fs::write(&path, "AAPL\n").unwrap();

    let store = SymbolStore::new(&path);
    assert_eq!(store.load().unwrap(), Some("AAPL".to_string()));
}
