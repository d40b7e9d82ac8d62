use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    AlreadyInitialized = 101,
    NotInitialized = 102,
    ParamsAlreadySet = 103,
    ParamsNotSet = 104,
    InvalidFundingThreshold = 105,
    ThresholdAboveGoal = 106,
    InvalidTokenPrice = 107,
    InvalidSchedule = 108, // Start not before finish
    StartInPast = 109,
    BonusLevelsNotAscending = 110,
    InvalidBonusRate = 111,
    BillingAlreadySet = 112,
    BillingNotSet = 113,
    TokenAlreadySet = 114,
    TokenNotOwned = 115,
    TokenMintingFinished = 116,
    TokenTimeModeMismatch = 117,
    InvalidAllocation = 118,
    TokenNotSet = 119,

    NotInProgress = 201,
    NotSuccessful = 202,
    NotFailed = 203,

    ContributionTooSmall = 301,
    FundingGoalExceeded = 302,
    ArithmeticOverflow = 303,

    TokensAlreadyReleased = 401,
    PayoutAlreadyWithdrawn = 402,
    NothingToRefund = 403,
    InsufficientBalance = 404, // Balance can't cover the post-payment
}
