use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
  Idle,
  Loading,
}

/// The page controller: the employee menu, the main content region and the
/// click listeners of the rendered comment buttons.
///
/// A refresh is split in two so the network work can run elsewhere:
/// `begin_refresh` locks the menu and yields the employee id, `load` fetches
/// and renders, and `complete_refresh` swaps the content in and unlocks.
pub(crate) struct Page {
  listeners: BTreeMap<u64, ButtonListener>,
  main: Node,
  phase: Phase,
  select: SelectMenu,
}

impl Default for Page {
  fn default() -> Self {
    let mut main = Node::build(Tag::Main, "", None);
    main.append(post_renderer::placeholder());

    Self {
      listeners: BTreeMap::new(),
      main,
      phase: Phase::Idle,
      select: SelectMenu::default(),
    }
  }
}

impl Page {
  /// Attaches one listener per comments button in the main region. Returns
  /// the post ids that were bound.
  pub(crate) fn add_button_listeners(&mut self) -> Vec<u64> {
    let post_ids = self
      .main
      .query_all(Tag::Button)
      .into_iter()
      .filter_map(Node::post_id)
      .collect::<Vec<_>>();

    for post_id in &post_ids {
      self.listeners.insert(*post_id, ButtonListener::new(*post_id));
    }

    post_ids
  }

  /// Starts a refresh for the selected employee. Refused while another
  /// refresh is in flight or when nothing is selected.
  pub(crate) fn begin_refresh(&mut self) -> Option<u64> {
    if self.phase == Phase::Loading {
      return None;
    }

    let user_id = self
      .select
      .value()?
      .parse::<u64>()
      .ok()
      .filter(|id| *id != 0)
      .unwrap_or(DEFAULT_USER_ID);

    self.select.disable();
    self.phase = Phase::Loading;

    Some(user_id)
  }

  pub(crate) fn click(&mut self, post_id: u64) -> Option<(bool, String)> {
    let listener = *self.listeners.get(&post_id)?;
    listener.handle(&mut self.main)
  }

  /// Finishes a refresh. Rendered content replaces the main region and its
  /// buttons get fresh listeners; without content the page is left as it
  /// was. Either way the menu is unlocked. Returns whether content changed.
  pub(crate) fn complete_refresh(&mut self, rendered: Option<Node>) -> bool {
    let refreshed = if let Some(rendered) = rendered {
      let detached = self.remove_button_listeners();
      let removed = self.main.delete_child_elements();

      self.main.append(rendered);

      let attached = self.add_button_listeners();

      debug!(
        "refreshed main: {removed} blocks removed, {} listeners detached, {} attached",
        detached.len(),
        attached.len()
      );

      true
    } else {
      false
    };

    self.select.enable();
    self.phase = Phase::Idle;

    refreshed
  }

  pub(crate) fn listener_ids(&self) -> Vec<u64> {
    self.listeners.keys().copied().collect()
  }

  /// Fetches the posts of `user_id` and renders them. `None` when the posts
  /// could not be fetched.
  pub(crate) async fn load(
    client: &Client,
    user_id: u64,
    concurrency: usize,
  ) -> Option<Node> {
    let posts = client.list_posts_by_user(Some(user_id)).await?;

    info!("rendering {} posts for user {user_id}", posts.len());

    Some(post_renderer::render_posts(client, Some(&posts), concurrency).await)
  }

  pub(crate) fn main(&self) -> &Node {
    &self.main
  }

  pub(crate) fn phase(&self) -> Phase {
    self.phase
  }

  pub(crate) fn populate_select_menu(
    &mut self,
    users: Option<&[User]>,
  ) -> Option<&SelectMenu> {
    let options = SelectMenu::create_options(users)?;

    self.select.append_options(options);

    Some(&self.select)
  }

  /// Detaches every listener, returning the post ids they were bound to.
  pub(crate) fn remove_button_listeners(&mut self) -> Vec<u64> {
    std::mem::take(&mut self.listeners).into_keys().collect()
  }

  pub(crate) fn select(&self) -> &SelectMenu {
    &self.select
  }

  pub(crate) fn select_mut(&mut self) -> &mut SelectMenu {
    &mut self.select
  }
}
