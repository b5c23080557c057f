use fileio_fs::log::init_tracing;
use fileio_fs::FileAccessor;

#[test]
fn test_init_tracing_once() {
    let first = init_tracing("fileio_fs=debug");
    let second = init_tracing("fileio_fs=debug");

    assert!(first.is_ok());
    assert!(second.is_err());

    // Failures are logged through the installed subscriber and still returned.
    let result = FileAccessor::default().read_utf8("does-not-exist/foo.txt");
    assert!(result.is_err());
}
