use crate::ui::filter::filter_paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct PickerState {
    paths: Vec<String>,
    pub filter: String,
    filtered_indices: Vec<usize>,
    selected: usize,
    mode: InputMode,
    searchable: bool,
}

impl PickerState {
    pub fn new(paths: &[String]) -> Self {
        let mut state = Self {
            paths: paths.to_vec(),
            filter: String::new(),
            filtered_indices: Vec::new(),
            selected: 0,
            mode: InputMode::Normal,
            searchable: true,
        };
        state.refresh_filter();
        state
    }

    /// A picker without a filter bar never enters search mode.
    pub fn with_search(mut self, enabled: bool) -> Self {
        self.searchable = enabled;
        self
    }

    pub fn searchable(&self) -> bool {
        self.searchable
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn refresh_filter(&mut self) {
        self.filtered_indices = filter_paths(&self.paths, &self.filter);
        if self.selected >= self.filtered_indices.len() {
            self.selected = 0;
        }
    }

    pub fn move_next(&mut self) {
        if self.filtered_indices.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.filtered_indices.len();
    }

    pub fn move_prev(&mut self) {
        if self.filtered_indices.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.filtered_indices.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn page_down(&mut self, step: usize) {
        if self.filtered_indices.is_empty() {
            return;
        }
        self.selected = (self.selected + step).min(self.filtered_indices.len() - 1);
    }

    pub fn page_up(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    pub fn select_first(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected = 0;
        }
    }

    pub fn select_last(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected = self.filtered_indices.len() - 1;
        }
    }

    pub fn on_char(&mut self, ch: char) {
        self.filter.push(ch);
        self.refresh_filter();
    }

    pub fn backspace(&mut self) {
        self.filter.pop();
        self.refresh_filter();
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.filtered_indices
            .get(self.selected)
            .map(|index| self.paths[*index].as_str())
    }

    pub fn filtered_paths(&self) -> Vec<&str> {
        self.filtered_indices
            .iter()
            .map(|index| self.paths[*index].as_str())
            .collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.filtered_indices.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(items: &[&str]) -> PickerState {
        let paths: Vec<String> = items.iter().map(|item| item.to_string()).collect();
        PickerState::new(&paths)
    }

    #[test]
    fn starts_on_first_entry() {
        let app = state(&["/a", "/b", "/c"]);
        assert_eq!(app.selected_path(), Some("/a"));
        assert_eq!(app.mode(), InputMode::Normal);
    }

    #[test]
    fn movement_wraps_around() {
        let mut app = state(&["/a", "/b", "/c"]);
        app.move_prev();
        assert_eq!(app.selected_path(), Some("/c"));
        app.move_next();
        assert_eq!(app.selected_path(), Some("/a"));
    }

    #[test]
    fn paging_clamps_to_bounds() {
        let mut app = state(&["/a", "/b", "/c", "/d", "/e"]);
        app.page_down(3);
        assert_eq!(app.selected_path(), Some("/d"));
        app.page_down(3);
        assert_eq!(app.selected_path(), Some("/e"));
        app.page_up(2);
        assert_eq!(app.selected_path(), Some("/c"));
        app.page_up(10);
        assert_eq!(app.selected_path(), Some("/a"));
    }

    #[test]
    fn first_and_last() {
        let mut app = state(&["/a", "/b", "/c"]);
        app.select_last();
        assert_eq!(app.selected_index(), Some(2));
        app.select_first();
        assert_eq!(app.selected_index(), Some(0));
    }

    #[test]
    fn filtering_narrows_and_resets_selection() {
        let mut app = state(&["/home/src", "/srv/www", "/home/docs"]);
        app.select_last();
        for ch in "home".chars() {
            app.on_char(ch);
        }
        assert_eq!(app.filtered_paths(), vec!["/home/src", "/home/docs"]);
        assert_eq!(app.selected_path(), Some("/home/src"));

        app.on_char('x');
        assert_eq!(app.selected_index(), None);
        assert_eq!(app.selected_path(), None);

        app.backspace();
        assert_eq!(app.filtered_paths().len(), 2);
    }

    #[test]
    fn empty_state_has_no_selection() {
        let mut app = state(&[]);
        app.move_next();
        app.page_down(5);
        assert_eq!(app.selected_index(), None);
        assert_eq!(app.selected_path(), None);
    }
}
