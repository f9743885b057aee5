use iced::Task;

use super::command::EditorCommand;
use super::event::EditorEffect;
use super::services::read_font_resource;
use super::state::EditorState;

/// Reduce an editor command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut EditorState,
    command: EditorCommand,
) -> Task<EditorEffect> {
    match command {
        EditorCommand::SetFamily(family) => {
            state.set_family(family);
            request_pending_font(state)
        },
        EditorCommand::SetWeight(weight) => {
            state.set_weight(weight);
            request_pending_font(state)
        },
        EditorCommand::ToggleItalic => {
            state.toggle_italic();
            request_pending_font(state)
        },
        EditorCommand::Edit(action) => {
            state.perform(action);
            Task::none()
        },
        EditorCommand::Reset => {
            state.reset();
            request_pending_font(state)
        },
        EditorCommand::Save => {
            match state.persist() {
                Ok(()) => log::info!("settings saved"),
                Err(err) => log::warn!("settings save failed: {err}"),
            }
            Task::none()
        },
        EditorCommand::FontResourceRead { href, result } => match result {
            Ok(bytes) => {
                state.mark_font_fetched(href.clone());
                Task::done(EditorEffect::RegisterFont { href, bytes })
            },
            Err(message) => {
                log::warn!("font resource {href} read failed: {message}");
                Task::none()
            },
        },
    }
}

/// Start reading the font resource linked since the last style pass.
pub(crate) fn request_pending_font(
    state: &mut EditorState,
) -> Task<EditorEffect> {
    let Some(href) = state.take_pending_link() else {
        return Task::none();
    };

    if state.is_font_fetched(&href) {
        log::debug!("font resource {href} already registered");
        return Task::none();
    }

    Task::perform(read_font_resource(href.clone()), move |result| {
        EditorEffect::FontResourceRead {
            href: href.clone(),
            result: result.map_err(|err| format!("{err}")),
        }
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use glyphpad_core::{
        FamilyChangePolicy, FontCatalog, FontFamily, MemoryStore,
        SelectionManager, SettingsStore, StoreError, StyleMode,
    };

    use super::{EditorCommand, reduce, request_pending_font};
    use crate::widgets::editor::services::load_catalog;
    use crate::widgets::editor::services::tests::test_temp_dir;
    use crate::widgets::editor::state::EditorState;

    const ROBOTO_REMOTE: &str = r#"{"Roboto": {"400": "https://r400", "700": "https://r700", "400italic": "https://r400i"}}"#;

    struct ReadOnlyStore;

    impl SettingsStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(
            &mut self,
            _key: &str,
            _value: &str,
        ) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only store")))
        }
    }

    fn state_over(
        catalog: FontCatalog,
        policy: FamilyChangePolicy,
    ) -> EditorState {
        EditorState::mount(
            SelectionManager::new(catalog, policy),
            Box::new(MemoryStore::new()),
            StyleMode::WithStylesheetLink,
        )
    }

    fn state(policy: FamilyChangePolicy) -> EditorState {
        let catalog = FontCatalog::from_json_str(ROBOTO_REMOTE)
            .expect("catalog should parse");
        state_over(catalog, policy)
    }

    fn local_catalog(dir: &Path) -> FontCatalog {
        let url = |name: &str| format!("file://{}", dir.join(name).display());
        FontCatalog::new(vec![FontFamily::new(
            "Local Sans",
            [("400", url("regular.ttf")), ("700", url("bold.ttf"))],
        )])
    }

    #[test]
    fn given_closest_match_policy_when_family_selected_then_weight_kept() {
        let mut state = state(FamilyChangePolicy::ClosestMatch);
        let _task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("700")));

        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Roboto")),
        );

        assert_eq!(state.selection().weight, "700");
        assert!(!state.selection().italic);
    }

    #[test]
    fn given_reset_policy_when_family_selected_then_weight_cleared() {
        let mut state = state(FamilyChangePolicy::Reset);
        let _task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("700")));

        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Roboto")),
        );

        assert_eq!(state.selection().weight, "");
    }

    #[test]
    fn given_chosen_family_when_cleared_then_selection_returns_to_unset() {
        let mut state = state(FamilyChangePolicy::ClosestMatch);
        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Roboto")),
        );
        let _task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("700")));

        let task = reduce(&mut state, EditorCommand::SetFamily(String::new()));

        assert_eq!(task.units(), 0);
        assert_eq!(state.selection().family, "");
        assert_eq!(state.selection().weight, "");
        assert!(!state.selection().italic);
        let saved = state.bridge().load().restored().expect("record saved");
        assert_eq!(saved.family, "");
    }

    #[test]
    fn given_remote_link_when_weight_selected_then_download_is_scheduled() {
        let mut state = state(FamilyChangePolicy::Reset);
        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Roboto")),
        );

        let task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("400")));

        assert_eq!(task.units(), 1);
        assert_eq!(state.surface().link(), Some("https://r400"));
        assert_eq!(state.take_pending_link(), None);
    }

    #[test]
    fn given_embedded_catalog_when_every_variant_selected_then_fonts_load() {
        let catalog = load_catalog(None);
        let mut scheduled = 0;
        let mut combos = 0;

        for family in catalog.families() {
            for weight in catalog.weight_options(family.name()) {
                let mut state =
                    state_over(catalog.clone(), FamilyChangePolicy::Reset);
                let _task = reduce(
                    &mut state,
                    EditorCommand::SetFamily(family.name().to_string()),
                );
                let task = reduce(
                    &mut state,
                    EditorCommand::SetWeight(weight.to_string()),
                );
                combos += 1;
                scheduled += task.units();
            }
        }

        assert!(combos > 0);
        assert_eq!(scheduled, combos);
    }

    #[test]
    fn given_local_file_link_when_requested_then_read_is_scheduled() {
        let root = test_temp_dir("reducer_local");
        fs::create_dir_all(&root).expect("temporary directory should exist");
        fs::write(root.join("regular.ttf"), b"font")
            .expect("font should be written");
        let mut state =
            state_over(local_catalog(&root), FamilyChangePolicy::Reset);
        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Local Sans")),
        );
        state.set_weight(String::from("400"));

        let task = request_pending_font(&mut state);

        assert_eq!(task.units(), 1);
        assert_eq!(request_pending_font(&mut state).units(), 0);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_read_bytes_when_reduced_then_font_registration_follows() {
        let mut state = state(FamilyChangePolicy::Reset);

        let task = reduce(
            &mut state,
            EditorCommand::FontResourceRead {
                href: String::from("https://r400"),
                result: Ok(vec![0, 1, 0, 0]),
            },
        );

        assert_eq!(task.units(), 1);
        assert!(state.is_font_fetched("https://r400"));
    }

    #[test]
    fn given_failed_read_when_reduced_then_nothing_is_registered() {
        let mut state = state(FamilyChangePolicy::Reset);

        let task = reduce(
            &mut state,
            EditorCommand::FontResourceRead {
                href: String::from("file:///missing.ttf"),
                result: Err(String::from("font resource IO failed")),
            },
        );

        assert_eq!(task.units(), 0);
        assert!(!state.is_font_fetched("file:///missing.ttf"));
    }

    #[test]
    fn given_fetched_font_when_linked_again_then_no_second_read() {
        let mut state = state(FamilyChangePolicy::Reset);
        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Roboto")),
        );
        let _task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("400")));
        let _task = reduce(
            &mut state,
            EditorCommand::FontResourceRead {
                href: String::from("https://r400"),
                result: Ok(vec![0, 1, 0, 0]),
            },
        );
        let _task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("700")));

        let task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("400")));

        assert_eq!(task.units(), 0);
    }

    #[test]
    fn given_italic_without_variant_when_toggled_then_link_unchanged() {
        let mut state = state(FamilyChangePolicy::Reset);
        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Roboto")),
        );
        let _task =
            reduce(&mut state, EditorCommand::SetWeight(String::from("700")));

        let task = reduce(&mut state, EditorCommand::ToggleItalic);

        assert_eq!(task.units(), 0);
        assert!(state.selection().italic);
        assert_eq!(state.surface().link(), Some("https://r700"));
    }

    #[test]
    fn given_save_command_when_reduced_then_record_matches_selection() {
        let mut state = state(FamilyChangePolicy::Reset);
        let _task = reduce(
            &mut state,
            EditorCommand::SetFamily(String::from("Roboto")),
        );

        let _task = reduce(&mut state, EditorCommand::Save);

        let saved = state.bridge().load().restored().expect("record saved");
        assert_eq!(&saved, state.selection());
    }

    #[test]
    fn given_failing_store_when_saved_then_error_is_reported() {
        let catalog = FontCatalog::from_json_str(ROBOTO_REMOTE)
            .expect("catalog should parse");
        let mut state = EditorState::mount(
            SelectionManager::new(catalog, FamilyChangePolicy::Reset),
            Box::new(ReadOnlyStore),
            StyleMode::WithStylesheetLink,
        );

        let result = state.persist();
        let task = reduce(&mut state, EditorCommand::Save);

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert_eq!(task.units(), 0);
    }
}
