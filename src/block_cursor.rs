/// Selection and scroll offset over the blocks of the main region.
#[derive(Default)]
pub(crate) struct BlockCursor {
  len: usize,
  offset: usize,
  selected: usize,
}

impl BlockCursor {
  pub(crate) fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub(crate) fn len(&self) -> usize {
    self.len
  }

  pub(crate) fn offset(&self) -> usize {
    if self.is_empty() {
      0
    } else {
      self.offset.min(self.selected_raw())
    }
  }

  /// Points the cursor at a freshly rendered region of `len` blocks.
  pub(crate) fn reset(&mut self, len: usize) {
    self.len = len;
    self.offset = 0;
    self.selected = 0;
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.is_empty() {
      None
    } else {
      Some(self.selected_raw())
    }
  }

  pub(crate) fn selected_raw(&self) -> usize {
    self.selected.min(self.len.saturating_sub(1))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset.min(self.len.saturating_sub(1));
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    self.selected = index.min(self.len.saturating_sub(1));
  }
}
