use bevy::prelude::*;

pub const TITLE_BAR_HEIGHT: f32 = 56.0;

/// Spawns a toolbar-like strip across the top of the window with a title and an
/// optional hint line underneath the grid.
pub fn spawn_title_bar(commands: &mut Commands, title: &str, hint: Option<&str>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(TITLE_BAR_HEIGHT),
                padding: UiRect::horizontal(Val::Px(16.0)),
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.16, 0.2, 0.32)),
        ))
        .with_child((
            Text::new(title),
            TextFont {
                font_size: 22.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));

    let Some(hint) = hint else {
        return;
    };

    commands.spawn((
        Text::new(hint),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.7)),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Percent(10.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
    ));
}
