//! Identifiers for every game action that can be bound to an input
//!
//! A `MappableFunction` is an opaque token: the keymap compares and hashes it
//! but never invokes it. The game owns the table that turns a token into a
//! callback, so this crate has no dependency on anything callable.

/// Unit type targeted by the "jump to next unit" functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Repair,
    Constructor,
    Sensor,
    Commander,
}

/// Secondary order toggles applied to the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DroidSetting {
    AttackCease,
    AttackReturn,
    AttackAtWill,
    MoveGuard,
    MovePursue,
    MovePatrol,
    ReturnToBase,
    GoForRepair,
    GoToTransport,
    RangeOptimum,
    RangeShort,
    RangeLong,
    RetreatMedium,
    RetreatHeavy,
    RetreatNever,
    Recycle,
}

/// Direct orders issued to the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DroidOrder {
    Hold,
    Stop,
}

/// Unit filters for the "select all ..." functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSelection {
    AllCombat,
    Cyborgs,
    AllDamaged,
    HalfTracked,
    Hovers,
    OnScreen,
    Tracked,
    Everything,
    Vtols,
    ArmedVtols,
    Wheeled,
    SameType,
    CombatCyborgs,
    Engineers,
    LandCombat,
    Mechanics,
    Transporters,
    RepairTanks,
    Sensors,
    Trucks,
}

/// Structure types cycled by the "select next factory" functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactoryKind {
    Factory,
    Cyborg,
    Vtol,
}

/// Every action that can be reached through a key mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappableFunction {
    // ========================================================================
    // Command panels
    // ========================================================================
    ChooseManufacture,
    ChooseResearch,
    ChooseBuild,
    ChooseDesign,
    ChooseIntelligence,
    ChooseCommand,

    // ========================================================================
    // Game state and display toggles
    // ========================================================================
    QuickSave,
    QuickLoad,
    ToggleRadar,
    ToggleConsole,
    ToggleEnergyBars,
    ScreenDump,
    ToggleFormationSpeedLimiting,
    MoveToLastMessagePos,
    ToggleSensorDisplay,
    ToggleOverlays,
    ToggleConsoleDrop,
    ToggleTeamChat,
    ToggleShadows,
    ToggleTrapCursor,
    ShowMappings,
    ToggleFullscreen,

    // ========================================================================
    // Groups and commanders (index 0-9)
    // ========================================================================
    AssignGrouping(u8),
    AddGrouping(u8),
    SelectGrouping(u8),
    SelectCommander(u8),

    // ========================================================================
    // Menus
    // ========================================================================
    AddMultiMenu,
    AddInGameOptions,
    RightOrderMenu,

    // ========================================================================
    // Camera
    // ========================================================================
    /// Scroll the camera; held while the key is down
    ScrollCamera { dx: i8, dy: i8 },
    SeekNorth,
    ToggleCamera,
    /// Positive zooms out, negative zooms in
    Zoom(i8),
    PitchForward,
    PitchBack,
    ResetPitch,
    RotateLeft,
    RotateRight,
    FaceNorth,
    FaceSouth,
    FaceEast,
    FaceWest,
    CentreOnBase,
    JumpToResourceExtractor,
    JumpToUnits(UnitKind),
    JumpToUnassignedUnits,

    // ========================================================================
    // Radar
    // ========================================================================
    /// Positive zooms in, negative zooms out
    RadarZoom(i8),
    ToggleRadarTerrain,
    ToggleRadarAllyEnemy,

    // ========================================================================
    // Game speed
    // ========================================================================
    SlowDown,
    SpeedUp,
    NormalSpeed,

    // ========================================================================
    // Unit orders and selection
    // ========================================================================
    SetDroid(DroidSetting),
    OrderDroid(DroidOrder),
    SelectUnits(UnitSelection),
    RotateBuilding { clockwise: bool },
    SelectNextFactory { kind: FactoryKind, jump: bool },
    SelectNextResearch { jump: bool },
    SelectNextPowerStation { jump: bool },

    // ========================================================================
    // Chat and beacons
    // ========================================================================
    SendGlobalMessage,
    SendTeamMessage,
    AddHelpBlip,

    // ========================================================================
    // Debug
    // ========================================================================
    ToggleDebugMappings,
    FrameRate,
    ToggleShowPath,
    ToggleShowGateways,
    ToggleVisibility,
    RaiseTile,
    LowerTile,
    ToggleFog,
    ToggleWeather,
    TriFlip,
    PerformanceSample,
    AllAvailable,
    KillSelected,
    ToggleGodMode,
    ChooseOptions,
    FinishResearch,
    RevealMapAtPos,
    TraceObject,
}

impl MappableFunction {
    /// Check if this is one of the debug-only cheats and diagnostics
    pub fn is_debug(self) -> bool {
        use MappableFunction::*;
        matches!(
            self,
            ToggleDebugMappings
                | FrameRate
                | ToggleShowPath
                | ToggleShowGateways
                | ToggleVisibility
                | RaiseTile
                | LowerTile
                | ToggleFog
                | ToggleWeather
                | TriFlip
                | PerformanceSample
                | AllAvailable
                | KillSelected
                | ToggleGodMode
                | ChooseOptions
                | FinishResearch
                | RevealMapAtPos
                | TraceObject
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parameterised_functions_are_distinct() {
        let mut seen = HashSet::new();
        for n in 0..10 {
            assert!(seen.insert(MappableFunction::AssignGrouping(n)));
            assert!(seen.insert(MappableFunction::SelectGrouping(n)));
        }
        assert!(seen.insert(MappableFunction::ScrollCamera { dx: 0, dy: 1 }));
        assert!(seen.insert(MappableFunction::ScrollCamera { dx: 0, dy: -1 }));
        assert!(!seen.insert(MappableFunction::SelectGrouping(3)));
    }

    #[test]
    fn test_is_debug() {
        assert!(MappableFunction::ToggleGodMode.is_debug());
        assert!(!MappableFunction::QuickSave.is_debug());
    }
}
