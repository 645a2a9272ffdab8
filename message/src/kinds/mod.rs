//! Concrete message kinds, grouped by functional area.

pub mod action;
pub mod board;
pub mod channel;
pub mod devcard;
pub mod elements;
pub mod lobby;
pub mod options;
pub mod session;
pub mod text;
pub mod trade;
pub mod turn;

pub use action::{ReportRobbery, RobberyLoot, SetLastAction, SetSpecialItem};
pub use board::{
    hex, BoardLayout, BoardLayout2, BuildRequest, CancelBuildRequest, DebugFreePlace,
    LastSettlement, LayoutPart, MovePiece, MoveRobber, PieceValue, PotentialSettlements, PutPiece,
    RemovePiece, RevealFogHex, SetShipRouteClosed, UndoPutPiece,
};
pub use channel::{
    ChannelMembers, ChannelTextMsg, Channels, DeleteChannel, JoinChannel, JoinChannelAuth,
    LeaveChannel, NewChannel,
};
pub use devcard::{
    dev_card, BuyDevCardRequest, DevCardAction, DevCardActionType, DevCardCount,
    InventoryItemAction, PlayDevCardRequest, SetPlayedDevCard,
};
pub use elements::{
    element_action, game_element, BotGameDataCheck, DiceResultResources, GameElements,
    LargestArmy, LongestRoad, PlayerElement, PlayerElements, PlayerRoll, PlayerStats,
    ResourceCount, SetSeatLock, SimpleAction, SimpleRequest,
};
pub use lobby::{
    BotJoinGameRequest, DeleteGame, GameMembers, GameStats, Games, JoinGame, JoinGameAuth,
    LeaveGame, NewGame, RobotDismiss, SitDown, TimingPing,
};
pub use options::{
    GameOptionGetDefaults, GameOptionGetInfos, GameOptionInfo, GamesWithOptions, LocalizedStrings,
    NewGameWithOptions, NewGameWithOptionsRequest, ScenarioInfo,
};
pub use session::{
    AdminPing, AdminReset, AuthRequest, BCastTextMsg, CreateAccount, ImARobot, LeaveAll,
    RejectConnection, ServerPing, StatusMessage, UpdateRobotParams, Version,
};
pub use text::{
    DeclinePlayerRequest, GameServerText, GameTextMsg, SvpTextMessage, UndoNotAllowedReasonText,
};
pub use trade::{
    AcceptOffer, BankTrade, ChoosePlayer, ChoosePlayerRequest, ClearOffer, ClearTradeMsg,
    MakeOffer, PickResourceType, PickResources, RejectOffer,
};
pub use turn::{
    ChangeFace, DiceResult, Discard, DiscardRequest, EndTurn, FirstPlayer, GameState,
    ResetBoardAuth, ResetBoardReject, ResetBoardRequest, ResetBoardVote, ResetBoardVoteRequest,
    RollDice, RollDicePrompt, RollDiceRequest, SetTurn, StartGame, Turn,
};
