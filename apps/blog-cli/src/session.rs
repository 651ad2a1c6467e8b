//! Interactive session - owns the post store and the editor and applies one
//! command per input line.

use std::io::{self, BufRead, Write};

use inkwell_core::DomainError;
use inkwell_core::domain::Field;
use inkwell_core::editor::PostEditor;
use inkwell_core::ports::{Clock, PublishNotifier};
use inkwell_infra::InMemoryPostStore;
use inkwell_shared::{DraftView, PostSummary};

use crate::command::{Command, HELP};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<C, N, W> {
    store: InMemoryPostStore,
    editor: PostEditor<C>,
    notifier: N,
    out: W,
    words_per_minute: u32,
}

impl<C, N, W> Session<C, N, W>
where
    C: Clock,
    N: PublishNotifier,
    W: Write,
{
    pub fn new(
        store: InMemoryPostStore,
        clock: C,
        notifier: N,
        out: W,
        words_per_minute: u32,
    ) -> Self {
        Self {
            store,
            editor: PostEditor::new(clock),
            notifier,
            out,
            words_per_minute,
        }
    }

    pub fn store(&self) -> &InMemoryPostStore {
        &self.store
    }

    #[cfg(test)]
    pub fn editor(&self) -> &PostEditor<C> {
        &self.editor
    }

    /// Read commands until end of input or `quit`. Bad commands are
    /// reported and skipped.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.handle(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(line = %line, error = %e, "Rejected command");
                    writeln!(self.out, "error: {e}")?;
                }
            }
        }
        self.out.flush()
    }

    pub fn handle(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::List { json } => {
                let summaries = PostSummary::list(self.store.posts(), self.words_per_minute);
                if json {
                    serde_json::to_writer_pretty(&mut self.out, &summaries)?;
                    writeln!(self.out)?;
                } else {
                    render::post_list(&mut self.out, &summaries)?;
                }
            }
            Command::Show(position) => {
                let post = position
                    .checked_sub(1)
                    .and_then(|index| self.store.get(index));
                match post {
                    Some(post) => {
                        let summary =
                            PostSummary::new(position, post, self.words_per_minute, true);
                        render::post(&mut self.out, &summary)?;
                    }
                    None => writeln!(self.out, "No post at position {position}")?,
                }
            }
            Command::Set(value) => {
                let field = value.field();
                self.editor.draft_mut().change(value);
                render::field_status(&mut self.out, field, self.editor.draft().error(field))?;
            }
            Command::Blur(field) => {
                self.editor.draft_mut().blur(field);
                render::field_status(&mut self.out, field, self.editor.draft().error(field))?;
            }
            Command::TagAdd(label) => {
                self.editor.draft_mut().add_tag(&label);
                self.tags_status()?;
            }
            Command::TagRemove(label) => {
                self.editor.draft_mut().remove_tag(&label);
                self.tags_status()?;
            }
            Command::Draft { json } => {
                let view = DraftView::new(self.editor.draft());
                if json {
                    serde_json::to_writer_pretty(&mut self.out, &view)?;
                    writeln!(self.out)?;
                } else {
                    render::draft(&mut self.out, &view)?;
                }
            }
            Command::Submit => match self.editor.submit(&mut self.store, &self.notifier) {
                Ok(post) => writeln!(
                    self.out,
                    "Published \"{}\" ({} posts)",
                    post.title,
                    self.store.len()
                )?,
                Err(DomainError::Rejected(errors)) => render::rejection(&mut self.out, &errors)?,
                Err(e) => writeln!(self.out, "error: {e}")?,
            },
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn tags_status(&mut self) -> io::Result<()> {
        let draft = self.editor.draft();
        let tags = if draft.tags().is_empty() {
            "(none)".to_string()
        } else {
            draft.tags().join(", ")
        };
        writeln!(self.out, "tags: {tags}")?;
        if let Some(error) = draft.error(Field::Tags) {
            writeln!(self.out, "    ! {error}")?;
        }
        Ok(())
    }
}
