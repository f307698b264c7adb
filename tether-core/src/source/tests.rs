use crate::conf::{ConfigError, SourceConfig};
use crate::source::ConnectionSource;
use crate::source::drivers::DriverTable;
use crate::source::memory::MemorySource;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn memory_source_counts_handle_traffic() {
    let source = MemorySource::new("mem://main");
    source.initialize().await.unwrap();

    let mut a = source.create_handle().unwrap();
    let mut b = source.create_handle().unwrap();
    a.connect().await.unwrap();
    b.connect().await.unwrap();
    assert_eq!(source.active_handles(), 2);

    a.execute("SELECT 1").await.unwrap();
    a.release().await.unwrap();

    assert_eq!(source.handles_created(), 2);
    assert_eq!(source.handles_released(), 1);
    assert_eq!(source.statements_executed(), 1);
    assert_eq!(source.active_handles(), 1);
}

#[tokio::test]
async fn memory_source_refuses_handles_outside_its_lifecycle() {
    let source = MemorySource::new("mem://main");

    // Before initialize.
    assert!(source.create_handle().is_err());

    source.initialize().await.unwrap();
    assert!(source.create_handle().is_ok());

    source.destroy().await.unwrap();
    assert!(source.create_handle().is_err());
}

#[tokio::test]
async fn memory_handle_guards_connect_ordering() {
    let source = MemorySource::new("mem://main");
    source.initialize().await.unwrap();

    let mut handle = source.create_handle().unwrap();
    assert!(handle.execute("SELECT 1").await.is_err());
    assert!(handle.release().await.is_err());

    handle.connect().await.unwrap();
    assert!(handle.execute("SELECT 1").await.is_ok());
    assert!(handle.release().await.is_ok());
}

#[test]
fn driver_table_builds_builtin_memory() {
    let table = DriverTable::builtin();
    let source = table
        .build(&SourceConfig::new("memory", "mem://main"))
        .expect("builtin driver");
    drop(source);
}

#[test]
fn driver_table_rejects_unknown_driver() {
    let table = DriverTable::builtin();
    let result = table.build(&SourceConfig::new("postgres", "pg://main"));
    assert!(matches!(
        result,
        Err(ConfigError::UnknownDriver { ref driver }) if driver == "postgres"
    ));
}
