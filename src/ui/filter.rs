pub fn filter_paths(paths: &[String], filter: &str) -> Vec<usize> {
    if filter.trim().is_empty() {
        return (0..paths.len()).collect();
    }

    let needle = filter.trim().to_lowercase();
    paths
        .iter()
        .enumerate()
        .filter(|(_, path)| path.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}
