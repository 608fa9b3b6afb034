use super::*;

pub(crate) struct State {
  cursor: BlockCursor,
  help: HelpView,
  list_height: usize,
  list_width: u16,
  next_request_id: u64,
  page: Page,
  pending_effects: Vec<Effect>,
  pending_posts: Option<PendingPosts>,
  preselect: Option<u64>,
  status: StatusLine,
}

impl State {
  fn apply_preselect(&mut self) {
    let Some(user_id) = self.preselect.take() else {
      return;
    };

    if self.page.select_mut().select_value(&user_id.to_string()) {
      self.begin_refresh();
    } else {
      self.flash(format!("No employee with id {user_id}"));
    }
  }

  /// Fires the menu's change handler: locks the menu and queues a fetch for
  /// the selected employee's posts.
  fn begin_refresh(&mut self) {
    let Some(user_id) = self.page.begin_refresh() else {
      return;
    };

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_posts = Some(PendingPosts {
      request_id,
      user_id,
    });

    self.set_status(LOADING_POSTS_STATUS);

    self.pending_effects.push(Effect::RefreshPosts {
      request_id,
      user_id,
    });
  }

  fn change_employee(&mut self, forward: bool) {
    let select = self.page.select_mut();

    let changed = if forward {
      select.select_next()
    } else {
      select.select_previous()
    };

    if changed {
      self.begin_refresh();
    }
  }

  fn click_selected(&mut self) {
    let Some(post_id) = self.selected_post_id() else {
      return;
    };

    match self.page.click(post_id) {
      Some((hidden, _)) => {
        let visibility = if hidden { "hidden" } else { "shown" };
        debug!("comments for post {post_id} {visibility}");
      }
      None => warn!(
        "no listener bound for post {post_id}, bound: {:?}",
        self.page.listener_ids()
      ),
    }
  }

  pub(crate) fn cursor_mut(&mut self) -> &mut BlockCursor {
    &mut self.cursor
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => should_exit = true,
      Command::ShowHelp => self.help.show(&mut self.status),
      Command::HideHelp => self.help.hide(&mut self.status),
      Command::PreviousEmployee => self.change_employee(false),
      Command::NextEmployee => self.change_employee(true),
      Command::Reload => self.begin_refresh(),
      Command::SelectNext => self.move_selection(1),
      Command::SelectPrevious => self.move_selection(-1),
      Command::PageDown => self.move_selection(self.page_jump(true)),
      Command::PageUp => self.move_selection(-self.page_jump(false)),
      Command::SelectFirst => self.cursor.set_selected(0),
      Command::SelectLast => {
        self.cursor.set_selected(self.cursor.len().saturating_sub(1));
      }
      Command::Click => self.click_selected(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn flash(&mut self, message: String) {
    if !self.help.is_visible() {
      self.status.flash(message);
    }
  }

  /// Applies a finished fetch and returns any effects it queued.
  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Users { users } => {
        match self.page.populate_select_menu(users.as_deref()) {
          Some(select) => {
            info!("loaded {} employees", select.len());
            self.set_status(IDLE_STATUS);
            self.apply_preselect();
          }
          None => {
            self.set_status(IDLE_STATUS);
            self.flash("Could not load employees".to_string());
          }
        }
      }
      Event::Posts {
        request_id,
        rendered,
      } => {
        let Some(pending) = self.pending_posts.as_ref() else {
          return Vec::new();
        };

        if pending.request_id != request_id {
          debug!("dropping stale posts for request {request_id}");
          return Vec::new();
        }

        let Some(pending) = self.pending_posts.take() else {
          return Vec::new();
        };

        if self.page.complete_refresh(rendered) {
          self.cursor.reset(self.page.main().children().len());
          self.set_status(IDLE_STATUS);
        } else {
          self.set_status(IDLE_STATUS);
          self.flash(format!(
            "Could not load posts for employee {}",
            pending.user_id
          ));
        }
      }
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn message(&self) -> &str {
    self.status.text()
  }

  fn move_selection(&mut self, delta: isize) {
    let current = self.cursor.selected_raw();

    let target = if delta >= 0 {
      current.saturating_add(delta.unsigned_abs())
    } else {
      current.saturating_sub(delta.unsigned_abs())
    };

    self.cursor.set_selected(target);
  }

  pub(crate) fn new(preselect: Option<u64>) -> Self {
    Self {
      cursor: BlockCursor::default(),
      help: HelpView::new(),
      list_height: 0,
      list_width: 0,
      next_request_id: 0,
      page: Page::default(),
      pending_effects: Vec::new(),
      pending_posts: None,
      preselect,
      status: StatusLine::new(LOADING_EMPLOYEES_STATUS),
    }
  }

  pub(crate) fn page(&self) -> &Page {
    &self.page
  }

  /// How many blocks one screen holds, counted from the selection towards
  /// the direction of travel using the blocks' rendered heights. At least 1.
  fn page_jump(&self, forward: bool) -> isize {
    let blocks = self.page.main().children();
    let current = self.cursor.selected_raw().min(blocks.len());

    let ahead = if forward {
      &blocks[current..]
    } else {
      &blocks[..(current + 1).min(blocks.len())]
    };

    let mut heights = ahead
      .iter()
      .map(|block| render::block_lines(block, self.list_width).len())
      .collect::<Vec<_>>();

    if !forward {
      heights.reverse();
    }

    let mut used = 0;

    let fitting = heights
      .into_iter()
      .take_while(|height| {
        used += height;
        used <= self.list_height
      })
      .count();

    isize::try_from(fitting.max(1)).unwrap_or(isize::MAX)
  }

  pub(crate) fn refresh_status(&mut self) {
    self.status.refresh();
  }

  fn selected_post_id(&self) -> Option<u64> {
    let index = self.cursor.selected_index()?;

    self
      .page
      .main()
      .children()
      .get(index)?
      .query_all(Tag::Button)
      .into_iter()
      .next()
      .and_then(Node::post_id)
  }

  pub(crate) fn set_list_area(&mut self, height: usize, width: u16) {
    self.list_height = height;
    self.list_width = width;
  }

  fn set_status(&mut self, message: &str) {
    if !self.help.is_visible() {
      self.status.set(message);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn user(id: u64, name: &str) -> User {
    User {
      company: Company {
        catch_phrase: "Multi-layered client-server neural-net".to_string(),
        name: "Romaguera-Crona".to_string(),
      },
      id,
      name: name.to_string(),
    }
  }

  fn rendered(post_ids: &[u64]) -> Node {
    let mut fragment = Node::build(Tag::Fragment, "", None);

    for post_id in post_ids {
      let post = Post {
        body: "body".to_string(),
        id: *post_id,
        title: format!("title {post_id}"),
        user_id: 1,
      };

      fragment.append(post_renderer::create_post(&post, None, None).unwrap());
    }

    fragment
  }

  fn loaded_state(preselect: Option<u64>) -> (State, Vec<Effect>) {
    let mut state = State::new(preselect);

    let effects = state.handle_event(Event::Users {
      users: Some(vec![user(1, "Leanne Graham"), user(2, "Ervin Howell")]),
    });

    (state, effects)
  }

  #[test]
  fn loading_employees_populates_menu() {
    let (state, effects) = loaded_state(None);

    assert!(effects.is_empty());
    assert_eq!(state.page().select().len(), 2);
    assert_eq!(state.message(), IDLE_STATUS);
  }

  #[test]
  fn failed_employee_load_flashes_error() {
    let mut state = State::new(None);

    let effects = state.handle_event(Event::Users { users: None });

    assert!(effects.is_empty());
    assert!(state.page().select().is_empty());
    assert_eq!(state.message(), "Could not load employees");
  }

  #[test]
  fn next_employee_emits_refresh_effect() {
    let (mut state, _) = loaded_state(None);

    let dispatch = state.dispatch_command(Command::NextEmployee);

    assert!(!dispatch.should_exit);
    assert_eq!(
      dispatch.effects,
      vec![Effect::RefreshPosts {
        request_id: 0,
        user_id: 1,
      }]
    );
    assert!(state.page().select().is_disabled());
    assert_eq!(state.message(), LOADING_POSTS_STATUS);
  }

  #[test]
  fn menu_changes_are_ignored_while_loading() {
    let (mut state, _) = loaded_state(None);

    state.dispatch_command(Command::NextEmployee);

    let dispatch = state.dispatch_command(Command::NextEmployee);
    assert!(dispatch.effects.is_empty());

    let dispatch = state.dispatch_command(Command::Reload);
    assert!(dispatch.effects.is_empty());

    assert_eq!(state.page().select().value(), Some("1"));
  }

  #[test]
  fn preselected_employee_refreshes_once_menu_loads() {
    let (state, effects) = loaded_state(Some(2));

    assert_eq!(
      effects,
      vec![Effect::RefreshPosts {
        request_id: 0,
        user_id: 2,
      }]
    );
    assert_eq!(state.page().select().selected_label(), Some("Ervin Howell"));
  }

  #[test]
  fn unknown_preselect_is_reported() {
    let (state, effects) = loaded_state(Some(42));

    assert!(effects.is_empty());
    assert_eq!(state.message(), "No employee with id 42");
  }

  #[test]
  fn posts_event_renders_and_unlocks() {
    let (mut state, _) = loaded_state(None);
    state.dispatch_command(Command::NextEmployee);

    state.handle_event(Event::Posts {
      request_id: 0,
      rendered: Some(rendered(&[1, 2])),
    });

    assert!(!state.page().select().is_disabled());
    assert_eq!(state.page().main().children().len(), 2);
    assert_eq!(state.message(), IDLE_STATUS);
  }

  #[test]
  fn stale_posts_event_is_dropped() {
    let (mut state, _) = loaded_state(None);
    state.dispatch_command(Command::NextEmployee);

    state.handle_event(Event::Posts {
      request_id: 7,
      rendered: Some(rendered(&[1])),
    });

    assert!(state.page().select().is_disabled());
    assert_eq!(state.page().main().children()[0].text(), DEFAULT_TEXT);
  }

  #[test]
  fn failed_posts_event_unlocks_and_reports() {
    let (mut state, _) = loaded_state(None);
    state.dispatch_command(Command::NextEmployee);

    state.handle_event(Event::Posts {
      request_id: 0,
      rendered: None,
    });

    assert!(!state.page().select().is_disabled());
    assert_eq!(state.message(), "Could not load posts for employee 1");
  }

  #[test]
  fn click_toggles_the_selected_block() {
    let (mut state, _) = loaded_state(None);
    state.dispatch_command(Command::NextEmployee);
    state.handle_event(Event::Posts {
      request_id: 0,
      rendered: Some(rendered(&[1, 2])),
    });

    state.dispatch_command(Command::SelectNext);
    state.dispatch_command(Command::Click);

    let main = state.page().main();

    assert!(main.query(Tag::Section, 1).unwrap().has_class(HIDDEN_CLASS));
    assert!(!main.query(Tag::Section, 2).unwrap().has_class(HIDDEN_CLASS));
    assert_eq!(main.query(Tag::Button, 2).unwrap().text(), HIDE_COMMENTS);
  }

  #[test]
  fn selection_moves_are_clamped() {
    let (mut state, _) = loaded_state(None);
    state.dispatch_command(Command::NextEmployee);
    state.handle_event(Event::Posts {
      request_id: 0,
      rendered: Some(rendered(&[1, 2, 3])),
    });

    state.set_list_area(30, 80);

    state.dispatch_command(Command::PageDown);
    assert_eq!(state.cursor_mut().selected_index(), Some(2));

    state.dispatch_command(Command::SelectPrevious);
    assert_eq!(state.cursor_mut().selected_index(), Some(1));

    state.dispatch_command(Command::PageUp);
    assert_eq!(state.cursor_mut().selected_index(), Some(0));

    state.dispatch_command(Command::SelectLast);
    assert_eq!(state.cursor_mut().selected_index(), Some(2));

    state.dispatch_command(Command::SelectFirst);
    assert_eq!(state.cursor_mut().selected_index(), Some(0));
  }

  #[test]
  fn page_moves_by_blocks_that_fit_on_screen() {
    let (mut state, _) = loaded_state(None);
    state.dispatch_command(Command::NextEmployee);
    state.handle_event(Event::Posts {
      request_id: 0,
      rendered: Some(rendered(&[1, 2, 3, 4, 5, 6])),
    });

    let block_height =
      render::block_lines(&state.page().main().children()[0], 80).len();

    state.set_list_area(block_height * 2 + 1, 80);

    state.dispatch_command(Command::PageDown);
    assert_eq!(state.cursor_mut().selected_index(), Some(2));

    state.dispatch_command(Command::PageDown);
    assert_eq!(state.cursor_mut().selected_index(), Some(4));

    state.dispatch_command(Command::PageUp);
    assert_eq!(state.cursor_mut().selected_index(), Some(2));

    state.set_list_area(block_height - 1, 80);

    state.dispatch_command(Command::PageDown);
    assert_eq!(state.cursor_mut().selected_index(), Some(3));
  }

  #[test]
  fn quit_requests_exit() {
    let mut state = State::new(None);

    assert!(state.dispatch_command(Command::Quit).should_exit);
  }

  #[test]
  fn status_updates_wait_behind_help() {
    let (mut state, _) = loaded_state(None);

    state.dispatch_command(Command::ShowHelp);
    state.dispatch_command(Command::NextEmployee);
    assert_eq!(state.message(), HELP_STATUS);

    state.dispatch_command(Command::HideHelp);
    assert_eq!(state.message(), IDLE_STATUS);
  }
}
