//! Built-in key function catalog
//!
//! Every function the game exposes to the keymap, with its context, mapping
//! type and shipped default bindings. Registration order here is the order
//! the registry reports entries in.

use super::context::InputContext;
use super::function::{
    DroidOrder, DroidSetting, FactoryKind, MappableFunction as F, UnitKind, UnitSelection,
};
use super::mapping::KeyCombination;
use super::registry::{KeyFunctionInfo, KeyMappingType};
use super::types::KeyMappingSlot::{Primary, Secondary};
use super::types::{KeyCode, KeyMappingInput, MouseKeyCode};

const NONE: Option<KeyCode> = None;
const CTRL: Option<KeyCode> = Some(KeyCode::LCTRL);
const SHIFT: Option<KeyCode> = Some(KeyCode::LSHIFT);
const ALT: Option<KeyCode> = Some(KeyCode::LALT);

/// The complete list of game key functions
#[rustfmt::skip]
pub fn builtin_functions() -> Vec<KeyFunctionInfo> {
    let mut entries = Vec::with_capacity(170);

    // ========================================================================
    // Command panels (fixed)
    // ========================================================================
    entries.push(fixed(InputContext::AlwaysActive, F::ChooseManufacture, "ChooseManufacture", "Manufacture").with_default(Primary, press(NONE, KeyCode::F1)));
    entries.push(fixed(InputContext::AlwaysActive, F::ChooseResearch, "ChooseResearch", "Research").with_default(Primary, press(NONE, KeyCode::F2)));
    entries.push(fixed(InputContext::AlwaysActive, F::ChooseBuild, "ChooseBuild", "Build").with_default(Primary, press(NONE, KeyCode::F3)));
    entries.push(fixed(InputContext::AlwaysActive, F::ChooseDesign, "ChooseDesign", "Design").with_default(Primary, press(NONE, KeyCode::F4)));
    entries.push(fixed(InputContext::AlwaysActive, F::ChooseIntelligence, "ChooseIntelligence", "Intelligence Display").with_default(Primary, press(NONE, KeyCode::F5)));
    entries.push(fixed(InputContext::AlwaysActive, F::ChooseCommand, "ChooseCommand", "Commanders").with_default(Primary, press(NONE, KeyCode::F6)));

    // ========================================================================
    // Function key row
    // ========================================================================
    entries.push(gameplay(F::QuickSave, "QuickSave", "QuickSave").with_default(Primary, press(NONE, KeyCode::F7)));
    entries.push(gameplay(F::ToggleRadar, "ToggleRadar", "Toggle Radar").with_default(Primary, press(SHIFT, KeyCode::F7)));
    entries.push(gameplay(F::QuickLoad, "QuickLoad", "QuickLoad").with_default(Primary, press(NONE, KeyCode::F8)));
    entries.push(gameplay(F::ToggleConsole, "ToggleConsole", "Toggle Console Display").with_default(Primary, press(SHIFT, KeyCode::F8)));
    entries.push(gameplay(F::ToggleEnergyBars, "ToggleEnergyBars", "Toggle Damage Bars On/Off").with_default(Primary, press(NONE, KeyCode::F9)));
    entries.push(fixed(InputContext::Background, F::ScreenDump, "ScreenDump", "Take Screen Shot").with_default(Primary, press(NONE, KeyCode::F10)));
    entries.push(gameplay(F::ToggleFormationSpeedLimiting, "ToggleFormationSpeedLimiting", "Toggle Formation Speed Limiting").with_default(Primary, press(NONE, KeyCode::F11)));
    entries.push(gameplay(F::MoveToLastMessagePos, "MoveToLastMessagePos", "View Location of Previous Message").with_default(Primary, press(NONE, KeyCode::F12)));
    entries.push(gameplay(F::ToggleSensorDisplay, "ToggleSensorDisplay", "Toggle Sensor display").with_default(Primary, press(SHIFT, KeyCode::F12)));

    // ========================================================================
    // Groups and commanders
    // ========================================================================
    for n in 0..10u8 {
        entries.push(
            gameplay(F::AssignGrouping(n), format!("AssignGrouping_{n}"), format!("Assign Group {n}"))
                .with_default(Primary, press(CTRL, KeyCode::digit(n))),
        );
    }
    for n in 0..10u8 {
        entries.push(
            gameplay(F::AddGrouping(n), format!("AddGrouping_{n}"), format!("Add to Group {n}"))
                .with_default(Primary, press(SHIFT, KeyCode::digit(n))),
        );
    }
    for n in 0..10u8 {
        entries.push(
            gameplay(F::SelectGrouping(n), format!("SelectGrouping_{n}"), format!("Select Group {n}"))
                .with_default(Primary, press(NONE, KeyCode::digit(n))),
        );
    }
    for n in 0..10u8 {
        entries.push(
            gameplay(F::SelectCommander(n), format!("SelectCommander_{n}"), format!("Select Commander {n}"))
                .with_default(Primary, press(ALT, KeyCode::digit(n))),
        );
    }

    // ========================================================================
    // Multiplayer
    // ========================================================================
    entries.push(
        KeyFunctionInfo::new(InputContext::Background, KeyMappingType::Assignable, F::AddMultiMenu, "addMultiMenu", "Multiplayer Options / Alliance dialog")
            .with_default(Primary, press(NONE, KeyCode::KP_ENTER)),
    );

    // ========================================================================
    // Camera
    // ========================================================================
    entries.push(gameplay(F::ScrollCamera { dx: 0, dy: 1 }, "CameraUp", "Move Camera Up").with_default(Primary, hold(NONE, KeyCode::UPARROW)));
    entries.push(gameplay(F::ScrollCamera { dx: 0, dy: -1 }, "CameraDown", "Move Camera Down").with_default(Primary, hold(NONE, KeyCode::DOWNARROW)));
    entries.push(gameplay(F::ScrollCamera { dx: 1, dy: 0 }, "CameraRight", "Move Camera Right").with_default(Primary, hold(NONE, KeyCode::RIGHTARROW)));
    entries.push(gameplay(F::ScrollCamera { dx: -1, dy: 0 }, "CameraLeft", "Move Camera Left").with_default(Primary, hold(NONE, KeyCode::LEFTARROW)));
    entries.push(gameplay(F::SeekNorth, "SeekNorth", "Snap View to North").with_default(Primary, press(NONE, KeyCode::BACKSPACE)));
    entries.push(gameplay(F::ToggleCamera, "ToggleCamera", "Toggle Tracking Camera").with_default(Primary, press(NONE, KeyCode::SPACE)));
    entries.push(fixed(InputContext::Background, F::AddInGameOptions, "addInGameOptions", "Display In-Game Options").with_default(Primary, press(NONE, KeyCode::ESC)));
    entries.push(
        radar(F::RadarZoom(-1), "RadarZoomOut", "Zoom Radar Out")
            .with_default(Primary, press(NONE, KeyCode::MINUS))
            .with_default(Secondary, press(NONE, MouseKeyCode::WheelDown)),
    );
    entries.push(
        radar(F::RadarZoom(1), "RadarZoomIn", "Zoom Radar In")
            .with_default(Primary, press(NONE, KeyCode::EQUALS))
            .with_default(Secondary, press(NONE, MouseKeyCode::WheelUp)),
    );
    entries.push(
        gameplay(F::Zoom(-1), "ZoomIn", "Zoom In")
            .with_default(Primary, hold(NONE, KeyCode::KP_PLUS))
            .with_default(Secondary, press(NONE, MouseKeyCode::WheelUp)),
    );
    entries.push(
        gameplay(F::Zoom(1), "ZoomOut", "Zoom Out")
            .with_default(Primary, hold(NONE, KeyCode::KP_MINUS))
            .with_default(Secondary, press(NONE, MouseKeyCode::WheelDown)),
    );
    entries.push(gameplay(F::PitchForward, "PitchForward", "Pitch Forward").with_default(Primary, hold(NONE, KeyCode::KP_2)));
    entries.push(gameplay(F::RotateLeft, "RotateLeft", "Rotate Left").with_default(Primary, hold(NONE, KeyCode::KP_4)));
    entries.push(gameplay(F::ResetPitch, "ResetPitch", "Reset Pitch").with_default(Primary, hold(NONE, KeyCode::KP_5)));
    entries.push(gameplay(F::RotateRight, "RotateRight", "Rotate Right").with_default(Primary, hold(NONE, KeyCode::KP_6)));
    entries.push(gameplay(F::PitchBack, "PitchBack", "Pitch Back").with_default(Primary, hold(NONE, KeyCode::KP_8)));
    entries.push(gameplay(F::RightOrderMenu, "RightOrderMenu", "Orders Menu").with_default(Primary, press(NONE, KeyCode::KP_0)));
    entries.push(gameplay(F::SlowDown, "SlowDown", "Decrease Game Speed").with_default(Primary, press(CTRL, KeyCode::MINUS)));
    entries.push(gameplay(F::SpeedUp, "SpeedUp", "Increase Game Speed").with_default(Primary, press(CTRL, KeyCode::EQUALS)));
    entries.push(gameplay(F::NormalSpeed, "NormalSpeed", "Reset Game Speed").with_default(Primary, press(CTRL, KeyCode::BACKSPACE)));
    entries.push(gameplay(F::FaceNorth, "FaceNorth", "View North").with_default(Primary, press(CTRL, KeyCode::UPARROW)));
    entries.push(gameplay(F::FaceSouth, "FaceSouth", "View South").with_default(Primary, press(CTRL, KeyCode::DOWNARROW)));
    entries.push(gameplay(F::FaceEast, "FaceEast", "View East").with_default(Primary, press(CTRL, KeyCode::LEFTARROW)));
    entries.push(gameplay(F::FaceWest, "FaceWest", "View West").with_default(Primary, press(CTRL, KeyCode::RIGHTARROW)));
    entries.push(gameplay(F::JumpToResourceExtractor, "JumpToResourceExtractor", "View next Oil Derrick").with_default(Primary, press(NONE, KeyCode::KP_STAR)));
    entries.push(gameplay(F::JumpToUnits(UnitKind::Repair), "JumpToRepairUnits", "View next Repair Unit"));
    entries.push(gameplay(F::JumpToUnits(UnitKind::Constructor), "JumpToConstructorUnits", "View next Truck"));
    entries.push(gameplay(F::JumpToUnits(UnitKind::Sensor), "JumpToSensorUnits", "View next Sensor Unit"));
    entries.push(gameplay(F::JumpToUnits(UnitKind::Commander), "JumpToCommandUnits", "View next Commander"));
    entries.push(gameplay(F::ToggleOverlays, "ToggleOverlays", "Toggle Overlays").with_default(Primary, press(NONE, KeyCode::TAB)));
    entries.push(gameplay(F::ToggleConsoleDrop, "ToggleConsoleDrop", "Toggle Console History ").with_default(Primary, press(NONE, KeyCode::BACKQUOTE)));
    entries.push(gameplay(F::ToggleTeamChat, "ToggleTeamChat", "Toggle Team Chat History").with_default(Primary, press(CTRL, KeyCode::BACKQUOTE)));
    entries.push(gameplay(F::RotateBuilding { clockwise: true }, "RotateBuildingClockwise", "Rotate Building Clockwise"));
    entries.push(gameplay(F::RotateBuilding { clockwise: false }, "RotateBuildingAnticlockwise", "Rotate Building Anticlockwise"));

    // ========================================================================
    // Unit orders (single key)
    // ========================================================================
    entries.push(gameplay(F::CentreOnBase, "CentreOnBase", "Center View on HQ").with_default(Primary, press(NONE, KeyCode::B)));
    entries.push(gameplay(F::SetDroid(DroidSetting::AttackCease), "SetDroidAttackCease", "Hold Fire").with_default(Primary, press(NONE, KeyCode::C)));
    entries.push(gameplay(F::JumpToUnassignedUnits, "JumpToUnassignedUnits", "View Unassigned Units").with_default(Primary, press(NONE, KeyCode::D)));
    entries.push(gameplay(F::SetDroid(DroidSetting::AttackReturn), "SetDroidAttackReturn", "Return Fire").with_default(Primary, press(NONE, KeyCode::E)));
    entries.push(gameplay(F::SetDroid(DroidSetting::AttackAtWill), "SetDroidAttackAtWill", "Fire at Will").with_default(Primary, press(NONE, KeyCode::F)));
    entries.push(gameplay(F::SetDroid(DroidSetting::MoveGuard), "SetDroidMoveGuard", "Guard Position").with_default(Primary, press(NONE, KeyCode::G)));
    entries.push(gameplay(F::SetDroid(DroidSetting::ReturnToBase), "SetDroidReturnToBase", "Return to HQ").with_default(Primary, press(SHIFT, KeyCode::H)));
    entries.push(gameplay(F::OrderDroid(DroidOrder::Hold), "SetDroidOrderHold", "Hold Position").with_default(Primary, press(NONE, KeyCode::H)));
    entries.push(gameplay(F::SetDroid(DroidSetting::RangeOptimum), "SetDroidRangeOptimum", "Optimum Range").with_default(Primary, press(NONE, KeyCode::I)));
    entries.push(gameplay(F::SetDroid(DroidSetting::RangeShort), "SetDroidRangeShort", "Short Range").with_default(Primary, press(NONE, KeyCode::O)));
    entries.push(gameplay(F::SetDroid(DroidSetting::MovePursue), "SetDroidMovePursue", "Pursue").with_default(Primary, press(NONE, KeyCode::P)));
    entries.push(gameplay(F::SetDroid(DroidSetting::MovePatrol), "SetDroidMovePatrol", "Patrol").with_default(Primary, press(NONE, KeyCode::Q)));
    entries.push(gameplay(F::SetDroid(DroidSetting::GoForRepair), "SetDroidGoForRepair", "Return For Repair").with_default(Primary, press(NONE, KeyCode::R)));
    entries.push(gameplay(F::OrderDroid(DroidOrder::Stop), "SetDroidOrderStop", "Stop Droid").with_default(Primary, press(NONE, KeyCode::S)));
    entries.push(gameplay(F::SetDroid(DroidSetting::GoToTransport), "SetDroidGoToTransport", "Go to Transport").with_default(Primary, press(NONE, KeyCode::T)));
    entries.push(gameplay(F::SetDroid(DroidSetting::RangeLong), "SetDroidRangeLong", "Long Range").with_default(Primary, press(NONE, KeyCode::U)));
    entries.push(gameplay(F::SendGlobalMessage, "SendGlobalMessage", "Send Global Text Message").with_default(Primary, press(NONE, KeyCode::RETURN)));
    entries.push(gameplay(F::SendTeamMessage, "SendTeamMessage", "Send Team Text Message").with_default(Primary, press(CTRL, KeyCode::RETURN)));
    entries.push(gameplay(F::AddHelpBlip, "AddHelpBlip", "Drop a beacon").with_default(Primary, press(ALT, KeyCode::H)));
    entries.push(gameplay(F::ToggleShadows, "ToggleShadows", "Toggles shadows").with_default(Primary, press(ALT, KeyCode::S)));
    entries.push(gameplay(F::ToggleTrapCursor, "toggleTrapCursor", "Trap cursor").with_default(Primary, press(ALT, KeyCode::T)));
    entries.push(radar(F::ToggleRadarTerrain, "ToggleRadarTerrain", "Toggle radar terrain").with_default(Primary, press(CTRL, KeyCode::TAB)));
    entries.push(radar(F::ToggleRadarAllyEnemy, "ToggleRadarAllyEnemy", "Toggle ally-enemy radar view").with_default(Primary, press(SHIFT, KeyCode::TAB)));
    entries.push(gameplay(F::ShowMappings, "ShowMappings", "Show all keyboard mappings").with_default(Primary, press(NONE, KeyCode::M)));

    // Punctuation row, for keyboards without a numpad
    entries.push(gameplay(F::SetDroid(DroidSetting::RetreatMedium), "SetDroidRetreatMedium", "Retreat at Medium Damage").with_default(Primary, press(NONE, KeyCode::COMMA)));
    entries.push(gameplay(F::SetDroid(DroidSetting::RetreatHeavy), "SetDroidRetreatHeavy", "Retreat at Heavy Damage").with_default(Primary, press(NONE, KeyCode::FULLSTOP)));
    entries.push(gameplay(F::SetDroid(DroidSetting::RetreatNever), "SetDroidRetreatNever", "Do or Die!").with_default(Primary, press(NONE, KeyCode::FORWARDSLASH)));

    // ========================================================================
    // Unit selection (Ctrl + letter)
    // ========================================================================
    entries.push(select(UnitSelection::AllCombat, "SelectAllCombatUnits", "Select all Combat Units", CTRL, KeyCode::A));
    entries.push(select(UnitSelection::Cyborgs, "SelectAllCyborgs", "Select all Cyborgs", CTRL, KeyCode::C));
    entries.push(select(UnitSelection::AllDamaged, "SelectAllDamaged", "Select all Heavily Damaged Units", CTRL, KeyCode::D));
    entries.push(select(UnitSelection::HalfTracked, "SelectAllHalfTracked", "Select all Half-tracks", CTRL, KeyCode::F));
    entries.push(select(UnitSelection::Hovers, "SelectAllHovers", "Select all Hovers", CTRL, KeyCode::H));
    entries.push(gameplay(F::SetDroid(DroidSetting::Recycle), "SetDroidRecycle", "Return for Recycling").with_default(Primary, press(CTRL, KeyCode::R)));
    entries.push(select(UnitSelection::OnScreen, "SelectAllOnScreenUnits", "Select all Units on Screen", CTRL, KeyCode::S));
    entries.push(select(UnitSelection::Tracked, "SelectAllTracked", "Select all Tracks", CTRL, KeyCode::T));
    entries.push(select(UnitSelection::Everything, "SelectAllUnits", "Select EVERY unit", CTRL, KeyCode::U));
    entries.push(select(UnitSelection::Vtols, "SelectAllVTOLs", "Select all VTOLs", CTRL, KeyCode::V));
    entries.push(select(UnitSelection::ArmedVtols, "SelectAllArmedVTOLs", "Select all fully-armed VTOLs", SHIFT, KeyCode::V));
    entries.push(select(UnitSelection::Wheeled, "SelectAllWheeled", "Select all Wheels", CTRL, KeyCode::W));
    entries.push(debug(F::FrameRate, "FrameRate", "Show frame rate").with_default(Primary, press(CTRL, KeyCode::Y)));
    entries.push(select(UnitSelection::SameType, "SelectAllSameType", "Select all units with the same components", CTRL, KeyCode::Z));

    // ========================================================================
    // Unit selection (Shift + letter)
    // ========================================================================
    entries.push(select(UnitSelection::CombatCyborgs, "SelectAllCombatCyborgs", "Select all Combat Cyborgs", SHIFT, KeyCode::C));
    entries.push(select(UnitSelection::Engineers, "SelectAllEngineers", "Select all Engineers", SHIFT, KeyCode::E));
    entries.push(select(UnitSelection::LandCombat, "SelectAllLandCombatUnits", "Select all Land Combat Units", SHIFT, KeyCode::G));
    entries.push(select(UnitSelection::Mechanics, "SelectAllMechanics", "Select all Mechanics", SHIFT, KeyCode::M));
    entries.push(select(UnitSelection::Transporters, "SelectAllTransporters", "Select all Transporters", SHIFT, KeyCode::P));
    entries.push(select(UnitSelection::RepairTanks, "SelectAllRepairTanks", "Select all Repair Tanks", SHIFT, KeyCode::R));
    entries.push(select(UnitSelection::Sensors, "SelectAllSensorUnits", "Select all Sensor Units", SHIFT, KeyCode::S));
    entries.push(select(UnitSelection::Trucks, "SelectAllTrucks", "Select all Trucks", SHIFT, KeyCode::T));

    // ========================================================================
    // Structure cycling (unbound by default)
    // ========================================================================
    entries.push(gameplay(F::SelectNextFactory { kind: FactoryKind::Factory, jump: false }, "SelectNextFactory", "Select next Factory"));
    entries.push(gameplay(F::SelectNextResearch { jump: false }, "SelectNextResearch", "Select next Research Facility"));
    entries.push(gameplay(F::SelectNextPowerStation { jump: false }, "SelectNextPowerStation", "Select next Power Generator"));
    entries.push(gameplay(F::SelectNextFactory { kind: FactoryKind::Cyborg, jump: false }, "SelectNextCyborgFactory", "Select next Cyborg Factory"));
    entries.push(gameplay(F::SelectNextFactory { kind: FactoryKind::Vtol, jump: false }, "SelectNextVtolFactory", "Select next VTOL Factory"));
    entries.push(gameplay(F::SelectNextFactory { kind: FactoryKind::Factory, jump: true }, "JumpNextFactory", "Jump to next Factory"));
    entries.push(gameplay(F::SelectNextResearch { jump: true }, "JumpNextResearch", "Jump to next Research Facility"));
    entries.push(gameplay(F::SelectNextPowerStation { jump: true }, "JumpNextPowerStation", "Jump to next Power Generator"));
    entries.push(gameplay(F::SelectNextFactory { kind: FactoryKind::Cyborg, jump: true }, "JumpNextCyborgFactory", "Jump to next Cyborg Factory"));
    entries.push(gameplay(F::SelectNextFactory { kind: FactoryKind::Vtol, jump: true }, "JumpNextVtolFactory", "Jump to next VTOL Factory"));

    // ========================================================================
    // Debug
    // ========================================================================
    entries.push(
        KeyFunctionInfo::new(InputContext::Background, KeyMappingType::Hidden, F::ToggleDebugMappings, "ToggleDebugMappings", "Toggle Debug Mappings")
            .with_default(Primary, press(SHIFT, KeyCode::BACKSPACE)),
    );
    entries.push(debug(F::ToggleShowPath, "ToggleShowPath", "Toggle display of droid path").with_default(Primary, press(CTRL, KeyCode::M)));
    entries.push(debug(F::ToggleShowGateways, "ToggleShowGateways", "Toggle display of gateways").with_default(Primary, press(CTRL, KeyCode::E)));
    entries.push(debug(F::ToggleVisibility, "ToggleVisibility", "Toggle visibility").with_default(Primary, press(NONE, KeyCode::V)));
    entries.push(debug(F::RaiseTile, "RaiseTile", "Raise tile height").with_default(Primary, hold(NONE, KeyCode::W)));
    entries.push(debug(F::LowerTile, "LowerTile", "Lower tile height").with_default(Primary, hold(NONE, KeyCode::A)));
    entries.push(debug(F::ToggleFog, "ToggleFog", "Toggles All fog").with_default(Primary, press(CTRL, KeyCode::J)));
    entries.push(debug(F::ToggleWeather, "ToggleWeather", "Trigger some weather").with_default(Primary, press(CTRL, KeyCode::Q)));
    entries.push(debug(F::TriFlip, "TriFlip", "Flip terrain triangle").with_default(Primary, press(NONE, KeyCode::K)));
    entries.push(debug(F::PerformanceSample, "PerformanceSample", "Make a performance measurement sample").with_default(Primary, press(CTRL, KeyCode::K)));
    entries.push(debug(F::AllAvailable, "AllAvailable", "Make all items available").with_default(Primary, press(ALT, KeyCode::A)));
    entries.push(debug(F::KillSelected, "KillSelected", "Kill Selected Unit(s)").with_default(Primary, press(ALT, KeyCode::K)));
    entries.push(debug(F::ToggleGodMode, "ToggleGodMode", "Toggle god Mode Status").with_default(Primary, press(CTRL, KeyCode::G)));
    entries.push(debug(F::ChooseOptions, "ChooseOptions", "Display Options Screen").with_default(Primary, press(CTRL, KeyCode::O)));
    entries.push(debug(F::FinishResearch, "FinishResearch", "Complete current research").with_default(Primary, press(CTRL, KeyCode::X)));
    entries.push(debug(F::RevealMapAtPos, "RevealMapAtPos", "Reveal map at mouse position").with_default(Primary, press(SHIFT, KeyCode::W)));
    entries.push(debug(F::TraceObject, "TraceObject", "Trace a game object").with_default(Primary, press(CTRL, KeyCode::L)));

    // ========================================================================
    // Hardcoded
    // ========================================================================
    entries.push(
        KeyFunctionInfo::new(InputContext::AlwaysActive, KeyMappingType::Hidden, F::ToggleFullscreen, "ToggleFullscreen", "Toggle fullscreen")
            .with_default(Primary, press(ALT, KeyCode::RETURN)),
    );

    entries
}

fn press(meta: Option<KeyCode>, input: impl Into<KeyMappingInput>) -> KeyCombination {
    KeyCombination::pressed(meta, input)
}

fn hold(meta: Option<KeyCode>, input: impl Into<KeyMappingInput>) -> KeyCombination {
    KeyCombination::held(meta, input)
}

fn gameplay(function: F, name: impl Into<String>, display: impl Into<String>) -> KeyFunctionInfo {
    KeyFunctionInfo::new(InputContext::Gameplay, KeyMappingType::Assignable, function, name, display)
}

fn radar(function: F, name: &str, display: &str) -> KeyFunctionInfo {
    KeyFunctionInfo::new(InputContext::Radar, KeyMappingType::Assignable, function, name, display)
}

fn fixed(context: InputContext, function: F, name: &str, display: &str) -> KeyFunctionInfo {
    KeyFunctionInfo::new(context, KeyMappingType::Fixed, function, name, display)
}

fn debug(function: F, name: &str, display: &str) -> KeyFunctionInfo {
    KeyFunctionInfo::new(InputContext::Debug, KeyMappingType::Hidden, function, name, display)
}

fn select(
    selection: UnitSelection,
    name: &str,
    display: &str,
    meta: Option<KeyCode>,
    key: KeyCode,
) -> KeyFunctionInfo {
    gameplay(F::SelectUnits(selection), name, display).with_default(Primary, press(meta, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyAction, KeyMappingSlot};
    use std::collections::{HashMap, HashSet};

    fn find<'a>(entries: &'a [KeyFunctionInfo], name: &str) -> &'a KeyFunctionInfo {
        entries
            .iter()
            .find(|info| info.name == name)
            .unwrap_or_else(|| panic!("missing {}", name))
    }

    #[test]
    fn test_catalog_names_and_functions_unique() {
        let entries = builtin_functions();
        let names: HashSet<_> = entries.iter().map(|info| info.name.as_str()).collect();
        let functions: HashSet<_> = entries.iter().map(|info| info.function).collect();
        assert_eq!(names.len(), entries.len());
        assert_eq!(functions.len(), entries.len());
    }

    #[test]
    fn test_panel_shortcuts_are_fixed() {
        let entries = builtin_functions();
        let build = find(&entries, "ChooseBuild");
        assert_eq!(build.kind, KeyMappingType::Fixed);
        assert_eq!(build.context, InputContext::AlwaysActive);
        assert_eq!(
            build.default_for(KeyMappingSlot::Primary),
            Some(&KeyCombination::pressed(None, KeyCode::F3))
        );
    }

    #[test]
    fn test_group_defaults() {
        let entries = builtin_functions();
        let assign = find(&entries, "AssignGrouping_4");
        assert_eq!(assign.function, F::AssignGrouping(4));
        assert_eq!(
            assign.default_for(KeyMappingSlot::Primary),
            Some(&KeyCombination::pressed(Some(KeyCode::LCTRL), KeyCode::digit(4)))
        );
        assert_eq!(find(&entries, "SelectGrouping_1").display_name, "Select Group 1");
    }

    #[test]
    fn test_zoom_has_wheel_secondary() {
        let entries = builtin_functions();
        let zoom_in = find(&entries, "ZoomIn");
        assert_eq!(
            zoom_in.default_for(KeyMappingSlot::Primary).map(|c| c.action),
            Some(KeyAction::Down)
        );
        assert_eq!(
            zoom_in.default_for(KeyMappingSlot::Secondary),
            Some(&KeyCombination::pressed(None, MouseKeyCode::WheelUp))
        );
    }

    #[test]
    fn test_debug_functions_hidden() {
        for info in builtin_functions() {
            if info.context == InputContext::Debug {
                assert_eq!(info.kind, KeyMappingType::Hidden, "{}", info.name);
                assert!(info.function.is_debug());
            }
        }
    }

    #[test]
    fn test_no_default_conflicts_within_context() {
        let mut seen = HashMap::new();
        for info in builtin_functions() {
            for (_, combination) in &info.default_mappings {
                let key = (info.context, combination.meta, combination.input);
                if let Some(previous) = seen.insert(key, info.name.clone()) {
                    panic!("{} and {} share a default binding", previous, info.name);
                }
            }
        }
    }

    #[test]
    fn test_unbound_entries_have_no_defaults() {
        let entries = builtin_functions();
        assert!(find(&entries, "JumpNextFactory").default_mappings.is_empty());
        assert!(find(&entries, "RotateBuildingClockwise").default_mappings.is_empty());
    }
}
