//! The message type registry: stable type identifiers, version windows,
//! decode calling conventions and label-strip behavior, all built at
//! compile time as exhaustive matches.

use crate::kinds::*;

/// How a kind's decoder expects its payload: one raw segment after the
/// type id, or the whole line pre-split on the primary separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    Data,
    Multi,
}

/// How a kind's human-readable rendering is turned back into wire fields.
#[derive(Clone, Copy)]
pub enum Strip {
    /// Drop `name=` labels, rejoin with the secondary separator.
    Generic,
    /// Drop `name=` labels, rejoin with the primary separator.
    GenericMulti,
    /// Kind-specific logic (hex fields, symbolic names, nested shapes).
    Custom(fn(&str) -> Option<String>),
    /// The rendering is not reversible for this kind.
    Unsupported,
}

/// Reserved null type id; lines carrying it dispatch to nothing.
pub const NULL_MESSAGE: u16 = 1000;

macro_rules! decode_arg {
    (data, $data:expr, $parts:expr) => {
        $data
    };
    (multi, $data:expr, $parts:expr) => {
        $parts
    };
}

macro_rules! message_registry {
    ( $( $variant:ident = $id:literal, $name:literal, $conv:ident,
         min $minv:literal, $strip:expr ; )+ ) => {

        /// One decoded protocol message of any kind.
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Message {
            $( $variant($variant), )+
        }

        impl Message {
            /// The kind's stable type identifier.
            #[must_use]
            pub fn type_id(&self) -> u16 {
                match self {
                    $( Self::$variant(_) => $id, )+
                }
            }

            /// The kind's name, as used by the human-readable form.
            #[must_use]
            pub fn type_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $name, )+
                }
            }

            /// Encodes the message into its wire line.
            #[must_use]
            pub fn encode(&self) -> String {
                let body = match self {
                    $( Self::$variant(m) => m.encode_payload(), )+
                };
                if body.is_empty() {
                    self.type_id().to_string()
                } else {
                    format!("{}{}{body}", self.type_id(), wire::SEP)
                }
            }

            /// Renders the human-readable form, `Name:label=value|...`.
            #[must_use]
            pub fn render(&self) -> String {
                let body = match self {
                    $( Self::$variant(m) => m.render_payload(), )+
                };
                format!("{}:{body}", self.type_name())
            }

            /// Lowest protocol version that understands this kind.
            #[must_use]
            pub fn minimum_version(&self) -> u16 {
                minimum_version(self.type_id()).unwrap_or(1000)
            }
        }

        /// Returns `true` if `type_id` names a registered kind.
        #[must_use]
        pub fn is_known(type_id: u16) -> bool {
            matches!(type_id, $( $id )|+ | NULL_MESSAGE)
        }

        /// The kind name for a type id.
        #[must_use]
        pub fn name_for_type(type_id: u16) -> Option<&'static str> {
            match type_id {
                $( $id => Some($name), )+
                _ => None,
            }
        }

        /// The type id for a kind name.
        #[must_use]
        pub fn type_for_name(name: &str) -> Option<u16> {
            match name {
                $( $name => Some($id), )+
                _ => None,
            }
        }

        /// Lowest protocol version that understands a kind.
        #[must_use]
        pub fn minimum_version(type_id: u16) -> Option<u16> {
            match type_id {
                $( $id => Some($minv), )+
                _ => None,
            }
        }

        /// The decode calling convention for a kind.
        #[must_use]
        pub fn convention(type_id: u16) -> Option<Convention> {
            match type_id {
                $( $id => Some(convention_value!($conv)), )+
                _ => None,
            }
        }

        /// How a kind's rendering is stripped back to wire fields.
        #[must_use]
        pub fn strip_behavior(type_id: u16) -> Option<Strip> {
            match type_id {
                $( $id => Some($strip), )+
                _ => None,
            }
        }

        /// Decodes a registered kind's payload. The caller supplies both
        /// forms; the kind's convention picks one.
        pub(crate) fn decode_known(type_id: u16, data: &str, parts: &[&str]) -> Option<Message> {
            match type_id {
                $( $id => $variant::decode(decode_arg!($conv, data, parts)).map(Message::$variant), )+
                _ => None,
            }
        }
    };
}

macro_rules! convention_value {
    (data) => {
        Convention::Data
    };
    (multi) => {
        Convention::Multi
    };
}

/// Highest protocol version still using a kind, for the kinds superseded
/// by the element messages at protocol 2000; `None` when the kind is
/// open-ended (or unknown).
#[must_use]
pub fn maximum_version(type_id: u16) -> Option<u16> {
    match type_id {
        // dev card count, played-card flag, last settlement
        1047 | 1048 | 1060 => Some(1999),
        _ => None,
    }
}

message_registry! {
    AuthRequest = 999, "AuthRequest", data, min 1119, Strip::Custom(AuthRequest::strip_labels);
    NewChannel = 1001, "NewChannel", data, min 1000, Strip::Generic;
    ChannelMembers = 1002, "ChannelMembers", data, min 1000, Strip::Custom(ChannelMembers::strip_labels);
    Channels = 1003, "Channels", data, min 1000, Strip::Custom(Channels::strip_labels);
    JoinChannel = 1004, "JoinChannel", data, min 1000, Strip::Custom(JoinChannel::strip_labels);
    ChannelTextMsg = 1005, "ChannelTextMsg", data, min 1000, Strip::Custom(ChannelTextMsg::strip_labels);
    LeaveChannel = 1006, "LeaveChannel", data, min 1000, Strip::Generic;
    DeleteChannel = 1007, "DeleteChannel", data, min 1000, Strip::Generic;
    LeaveAll = 1008, "LeaveAll", data, min 1000, Strip::Generic;
    PutPiece = 1009, "PutPiece", data, min 1000, Strip::Custom(PutPiece::strip_labels);
    GameTextMsg = 1010, "GameTextMsg", data, min 1000, Strip::Custom(GameTextMsg::strip_labels);
    LeaveGame = 1011, "LeaveGame", data, min 1000, Strip::Generic;
    SitDown = 1012, "SitDown", data, min 1000, Strip::Generic;
    JoinGame = 1013, "JoinGame", data, min 1000, Strip::Custom(JoinGame::strip_labels);
    BoardLayout = 1014, "BoardLayout", data, min 1000, Strip::Custom(BoardLayout::strip_labels);
    DeleteGame = 1015, "DeleteGame", data, min 1000, Strip::Generic;
    NewGame = 1016, "NewGame", data, min 1000, Strip::Generic;
    GameMembers = 1017, "GameMembers", data, min 1000, Strip::Custom(GameMembers::strip_labels);
    StartGame = 1018, "StartGame", data, min 1000, Strip::Generic;
    Games = 1019, "Games", data, min 1000, Strip::Custom(Games::strip_labels);
    JoinChannelAuth = 1020, "JoinChannelAuth", data, min 1000, Strip::Generic;
    JoinGameAuth = 1021, "JoinGameAuth", data, min 1000, Strip::Custom(JoinGameAuth::strip_labels);
    ImARobot = 1022, "ImARobot", data, min 1000, Strip::Generic;
    BotJoinGameRequest = 1023, "BotJoinGameRequest", data, min 1000, Strip::Generic;
    PlayerElement = 1024, "PlayerElement", data, min 1000, Strip::Custom(PlayerElement::strip_labels);
    GameState = 1025, "GameState", data, min 1000, Strip::Generic;
    Turn = 1026, "Turn", data, min 1000, Strip::Generic;
    DiceResult = 1028, "DiceResult", data, min 1000, Strip::Generic;
    DiscardRequest = 1029, "DiscardRequest", data, min 1000, Strip::Generic;
    RollDiceRequest = 1030, "RollDiceRequest", data, min 1000, Strip::Generic;
    RollDice = 1031, "RollDice", data, min 1000, Strip::Generic;
    EndTurn = 1032, "EndTurn", data, min 1000, Strip::Generic;
    Discard = 1033, "Discard", data, min 1000, Strip::Custom(Discard::strip_labels);
    MoveRobber = 1034, "MoveRobber", data, min 1000, Strip::Custom(MoveRobber::strip_labels);
    ChoosePlayer = 1035, "ChoosePlayer", data, min 1000, Strip::Generic;
    ChoosePlayerRequest = 1036, "ChoosePlayerRequest", data, min 1000, Strip::Custom(ChoosePlayerRequest::strip_labels);
    RejectOffer = 1037, "RejectOffer", data, min 1000, Strip::Generic;
    ClearOffer = 1038, "ClearOffer", data, min 1000, Strip::Generic;
    AcceptOffer = 1039, "AcceptOffer", data, min 1000, Strip::Generic;
    BankTrade = 1040, "BankTrade", data, min 1000, Strip::Custom(BankTrade::strip_labels);
    MakeOffer = 1041, "MakeOffer", data, min 1000, Strip::Custom(MakeOffer::strip_labels);
    ClearTradeMsg = 1042, "ClearTradeMsg", data, min 1000, Strip::Generic;
    BuildRequest = 1043, "BuildRequest", data, min 1000, Strip::Generic;
    CancelBuildRequest = 1044, "CancelBuildRequest", data, min 1000, Strip::Generic;
    BuyDevCardRequest = 1045, "BuyDevCardRequest", data, min 1000, Strip::Generic;
    DevCardAction = 1046, "DevCardAction", data, min 1000, Strip::Custom(DevCardAction::strip_labels);
    DevCardCount = 1047, "DevCardCount", data, min 1000, Strip::Generic;
    SetPlayedDevCard = 1048, "SetPlayedDevCard", data, min 1000, Strip::Generic;
    PlayDevCardRequest = 1049, "PlayDevCardRequest", data, min 1000, Strip::Generic;
    PickResources = 1052, "PickResources", data, min 1000, Strip::Custom(PickResources::strip_labels);
    PickResourceType = 1053, "PickResourceType", data, min 1000, Strip::Generic;
    FirstPlayer = 1054, "FirstPlayer", data, min 1000, Strip::Generic;
    SetTurn = 1055, "SetTurn", data, min 1000, Strip::Generic;
    RobotDismiss = 1056, "RobotDismiss", data, min 1000, Strip::Generic;
    PotentialSettlements = 1057, "PotentialSettlements", data, min 1000, Strip::Custom(PotentialSettlements::strip_labels);
    ChangeFace = 1058, "ChangeFace", data, min 1000, Strip::Generic;
    RejectConnection = 1059, "RejectConnection", data, min 1000, Strip::Generic;
    LastSettlement = 1060, "LastSettlement", data, min 1000, Strip::Custom(LastSettlement::strip_labels);
    GameStats = 1061, "GameStats", data, min 1000, Strip::Generic;
    BCastTextMsg = 1062, "BCastTextMsg", data, min 1000, Strip::Generic;
    ResourceCount = 1063, "ResourceCount", data, min 1000, Strip::Generic;
    AdminPing = 1064, "AdminPing", data, min 1000, Strip::Generic;
    AdminReset = 1065, "AdminReset", data, min 1000, Strip::Generic;
    LongestRoad = 1066, "LongestRoad", data, min 1000, Strip::Generic;
    LargestArmy = 1067, "LargestArmy", data, min 1000, Strip::Generic;
    SetSeatLock = 1068, "SetSeatLock", data, min 1000, Strip::Custom(SetSeatLock::strip_labels);
    StatusMessage = 1069, "StatusMessage", data, min 1000, Strip::Generic;
    CreateAccount = 1070, "CreateAccount", data, min 1000, Strip::Custom(CreateAccount::strip_labels);
    UpdateRobotParams = 1071, "UpdateRobotParams", data, min 1000, Strip::Generic;
    RollDicePrompt = 1072, "RollDicePrompt", data, min 1100, Strip::Generic;
    ResetBoardRequest = 1073, "ResetBoardRequest", data, min 1100, Strip::Generic;
    ResetBoardAuth = 1074, "ResetBoardAuth", data, min 1100, Strip::Generic;
    ResetBoardVoteRequest = 1075, "ResetBoardVoteRequest", data, min 1100, Strip::Generic;
    ResetBoardVote = 1076, "ResetBoardVote", data, min 1100, Strip::Generic;
    ResetBoardReject = 1077, "ResetBoardReject", data, min 1100, Strip::Generic;
    NewGameWithOptionsRequest = 1078, "NewGameWithOptionsRequest", data, min 1107, Strip::Unsupported;
    NewGameWithOptions = 1079, "NewGameWithOptions", data, min 1107, Strip::Generic;
    GameOptionGetDefaults = 1080, "GameOptionGetDefaults", data, min 1107, Strip::Generic;
    GameOptionGetInfos = 1081, "GameOptionGetInfos", data, min 1107, Strip::Generic;
    GameOptionInfo = 1082, "GameOptionInfo", multi, min 1107, Strip::GenericMulti;
    GamesWithOptions = 1083, "GamesWithOptions", multi, min 1107, Strip::GenericMulti;
    BoardLayout2 = 1084, "BoardLayout2", data, min 1108, Strip::Custom(BoardLayout2::strip_labels);
    PlayerStats = 1085, "PlayerStats", multi, min 1109, Strip::GenericMulti;
    PlayerElements = 1086, "PlayerElements", multi, min 2000, Strip::Custom(PlayerElements::strip_labels);
    DebugFreePlace = 1087, "DebugFreePlace", data, min 1112, Strip::Custom(DebugFreePlace::strip_labels);
    TimingPing = 1088, "TimingPing", data, min 1113, Strip::Generic;
    SimpleRequest = 1089, "SimpleRequest", data, min 1118, Strip::Generic;
    SimpleAction = 1090, "SimpleAction", data, min 1119, Strip::Generic;
    GameServerText = 1091, "GameServerText", data, min 2000, Strip::Custom(GameServerText::strip_labels);
    DiceResultResources = 1092, "DiceResultResources", multi, min 2000, Strip::GenericMulti;
    MovePiece = 1093, "MovePiece", data, min 2000, Strip::Generic;
    RemovePiece = 1094, "RemovePiece", data, min 2000, Strip::Generic;
    PieceValue = 1095, "PieceValue", data, min 2000, Strip::Generic;
    GameElements = 1096, "GameElements", multi, min 2000, Strip::Custom(GameElements::strip_labels);
    SvpTextMessage = 1097, "SVPTextMessage", data, min 2000, Strip::Generic;
    InventoryItemAction = 1098, "InventoryItemAction", data, min 2000, Strip::Unsupported;
    SetSpecialItem = 1099, "SetSpecialItem", data, min 2000, Strip::Custom(SetSpecialItem::strip_labels);
    LocalizedStrings = 1100, "LocalizedStrings", multi, min 2000, Strip::Unsupported;
    ScenarioInfo = 1101, "ScenarioInfo", multi, min 2000, Strip::Unsupported;
    ReportRobbery = 1102, "ReportRobbery", data, min 2450, Strip::Custom(ReportRobbery::strip_labels);
    BotGameDataCheck = 1103, "BotGameDataCheck", multi, min 2500, Strip::GenericMulti;
    SetShipRouteClosed = 1104, "SetShipRouteClosed", multi, min 2700, Strip::GenericMulti;
    UndoPutPiece = 1105, "UndoPutPiece", data, min 2700, Strip::Custom(UndoPutPiece::strip_labels);
    SetLastAction = 1106, "SetLastAction", data, min 2700, Strip::Custom(SetLastAction::strip_labels);
    UndoNotAllowedReasonText = 1107, "UndoNotAllowedReasonText", data, min 2700, Strip::Generic;
    DeclinePlayerRequest = 1108, "DeclinePlayerRequest", data, min 2500, Strip::Custom(DeclinePlayerRequest::strip_labels);
    Version = 9998, "Version", data, min 1100, Strip::Custom(Version::strip_labels);
    ServerPing = 9999, "ServerPing", data, min 1000, Strip::Generic;
    RevealFogHex = 10001, "RevealFogHex", data, min 2000, Strip::Generic;
}
