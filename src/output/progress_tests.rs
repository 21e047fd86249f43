use super::*;

#[test]
fn test_progress_bar_hidden_in_quiet_mode() {
    let progress = ScanProgress::new(100, true);
    progress.inc();
    progress.inc();
    progress.finish();
    assert_eq!(progress.position(), 2);
}

#[test]
fn test_progress_bar_hidden_when_not_tty() {
    let progress = ScanProgress::new_with_visibility(5, false, false);
    progress.inc();
    progress.finish();
    assert_eq!(progress.position(), 1);
}

#[test]
fn test_progress_bar_clone_shares_counter() {
    let progress = ScanProgress::new(100, true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn test_progress_bar_parallel_increments() {
    use rayon::prelude::*;

    let progress = ScanProgress::new(1000, true);
    (0..1000).into_par_iter().for_each(|_| progress.inc());

    assert_eq!(progress.position(), 1000);
}
