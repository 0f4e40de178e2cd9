
use crate::fakers::{fake_console, ScriptedTerminal};
use console_kit::{
    domain::errors::{Errors, MenuError},
    Menu, Selection,
};

fn fruit() -> anyhow::Result<Menu<String>> {
    Ok(Menu::new(vec!["apple".to_string(), "banana".to_string()])?)
}

#[test]
fn out_of_range_choices_are_warned_and_asked_again() -> anyhow::Result<()> {
    // Arrange
    let mut console = fake_console(ScriptedTerminal::with_lines(&["0", "3", "1"]));

    // Act
    let choice = console.select("Pick a fruit", fruit()?)?;

    // Assert
    assert_eq!(choice, "apple");

    let terminal = console.terminal();
    assert_eq!(terminal.count("Invalid option, pick between 1 and 2"), 2);
    assert_eq!(terminal.count("1. apple\n2. banana\nPick a fruit:"), 3);

    Ok(())
}

#[test]
fn non_numeric_choice_is_warned_and_asked_again() -> anyhow::Result<()> {
    // Arrange
    let mut console = fake_console(ScriptedTerminal::with_lines(&["banana", " 2 "]));

    // Act
    let choice = console.select("Pick a fruit", fruit()?)?;

    // Assert
    assert_eq!(choice, "banana");
    assert_eq!(console.terminal().count("You must select an option"), 1);

    Ok(())
}

#[test]
fn none_entry_is_listed_last_and_selects_nothing() -> anyhow::Result<()> {
    // Arrange
    let mut console = fake_console(ScriptedTerminal::with_lines(&["3"]));

    // Act
    let selection = console.select_option("Pick a fruit", fruit()?.with_none("Neither"))?;

    // Assert
    assert_eq!(selection, Selection::NoneChosen);
    assert!(console
        .terminal()
        .printed()
        .contains("1. apple\n2. banana\n3. Neither\nPick a fruit:"));

    Ok(())
}

#[test]
fn none_entry_counts_towards_the_valid_range() -> anyhow::Result<()> {
    // Arrange
    let mut console = fake_console(ScriptedTerminal::with_lines(&["4", "2"]));

    // Act
    let selection = console.select_option("Pick a fruit", fruit()?.with_none("Neither"))?;

    // Assert
    assert_eq!(selection, Selection::Selected("banana".to_string()));
    assert_eq!(
        console.terminal().count("Invalid option, pick between 1 and 3"),
        1
    );

    Ok(())
}

#[test]
fn select_reports_nothing_selected_for_the_none_entry() -> anyhow::Result<()> {
    let mut console = fake_console(ScriptedTerminal::with_lines(&["3"]));

    let result = console.select("Pick a fruit", fruit()?.with_none("Neither"));

    assert!(matches!(result, Err(Errors::NothingSelected)));

    Ok(())
}

#[test]
fn select_or_falls_back_for_the_none_entry() -> anyhow::Result<()> {
    let mut console = fake_console(ScriptedTerminal::with_lines(&["3"]));

    let choice = console.select_or(
        "Pick a fruit",
        fruit()?.with_none("Neither"),
        "cherry".to_string(),
    )?;

    assert_eq!(choice, "cherry");

    Ok(())
}

#[test]
fn custom_names_are_shown_but_options_returned() -> anyhow::Result<()> {
    // Arrange
    let menu = Menu::with_names(vec![10, 20], vec!["Ten".into(), "Twenty".into()])?;
    let mut console = fake_console(ScriptedTerminal::with_lines(&["2"]));

    // Act
    let value = console.select("Amount", menu)?;

    // Assert
    assert_eq!(value, 20);
    assert!(console.terminal().printed().contains("1. Ten\n2. Twenty\n"));

    Ok(())
}

#[test]
fn malformed_menus_fail_before_prompting() {
    assert_eq!(Menu::<String>::new(vec![]).unwrap_err(), MenuError::Empty);
    assert_eq!(
        Menu::with_names(vec![1, 2], vec!["one".into()]).unwrap_err(),
        MenuError::NameCount {
            names: 1,
            options: 2
        }
    );
}

#[test]
fn closed_input_ends_the_menu() -> anyhow::Result<()> {
    let mut console = fake_console(ScriptedTerminal::with_lines(&["9"]));

    let result = console.select("Pick a fruit", fruit()?);

    assert!(matches!(result, Err(Errors::EndOfInput)));

    Ok(())
}
