pub(crate) mod editor_form;
