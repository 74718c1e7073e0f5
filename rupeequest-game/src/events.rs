//! Built-in life event catalog.
//!
//! Content is deliberately declarative: every option describes its outcome as
//! an effect step list that the engine interprets. Probability thresholds are
//! game-balance literals; changing one changes the tuning of the whole run.

use std::sync::OnceLock;

use crate::data::Op::{self, Add, AvoidScam, Set, Spend, Stress};
use crate::data::StatField::{Balance, EmiPerMonth, FutureScore, Income, Loans, Savings};
use crate::data::StressOp as S;
use crate::data::{Cond, EventCatalog, EventKind, EventOption, LifeEvent, Rarity, Risk, Step};
use crate::state::StressLevel::{Critical, High, Low, Medium};

/// The process-wide immutable event catalog.
pub fn builtin_catalog() -> &'static EventCatalog {
    static CATALOG: OnceLock<EventCatalog> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn build_catalog() -> EventCatalog {
    let mut events = Vec::with_capacity(30);
    events.extend(emergencies());
    events.extend(opportunities());
    events.extend(scams());
    events.extend(regular_events());
    events.extend(random_encounters());
    events.extend(boss_events());
    EventCatalog::from_events(events)
}

fn event(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    kind: EventKind,
    rarity: Rarity,
) -> LifeEvent {
    LifeEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        kind,
        rarity,
        expense: None,
        min_month: None,
        options: Vec::new(),
    }
}

fn opt(label: &str, description: &str, risk: Risk, consequence: &str, effect: Vec<Step>) -> EventOption {
    EventOption {
        label: label.to_string(),
        description: description.to_string(),
        risk,
        consequence: consequence.to_string(),
        effect,
    }
}

fn ops(list: Vec<Op>) -> Vec<Step> {
    list.into_iter().map(Step::Op).collect()
}

fn emergencies() -> Vec<LifeEvent> {
    vec![
        LifeEvent {
            expense: Some(8_000),
            options: vec![
                opt(
                    "Use Savings",
                    "Pay from your emergency fund",
                    Risk::Safe,
                    "Paid ₹8,000 from savings. This is why emergency funds exist!",
                    vec![
                        Step::Op(Spend(Savings, 8_000)),
                        Step::If {
                            cond: Cond::SavingsAtLeast(8_000),
                            then: vec![Add(FutureScore, 5)],
                            otherwise: vec![Stress(S::Set(High)), Add(FutureScore, -5)],
                        },
                    ],
                ),
                opt(
                    "Take Loan",
                    "Borrow money at 12% interest",
                    Risk::Moderate,
                    "Added ₹8,000 loan. EMI increased by ₹1,000/month.",
                    ops(vec![
                        Add(Loans, 8_000),
                        Add(EmiPerMonth, 1_000),
                        Stress(S::Set(High)),
                        Add(FutureScore, -10),
                    ]),
                ),
                opt(
                    "Ignore It",
                    "Hope it gets better",
                    Risk::Risky,
                    "Condition worsened severely. Major health and stress impact!",
                    ops(vec![Stress(S::Set(Critical)), Add(FutureScore, -20)]),
                ),
            ],
            ..event(
                "medical_emergency",
                "Medical Emergency",
                "A sudden illness requires immediate hospital treatment. The estimated cost is ₹8,000.",
                "🏥",
                EventKind::Emergency,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            expense: Some(3_500),
            options: vec![
                opt(
                    "Repair It",
                    "Pay for repairs now",
                    Risk::Safe,
                    "Vehicle repaired. Mobility restored!",
                    ops(vec![Spend(Balance, 3_500), Add(FutureScore, 2)]),
                ),
                opt(
                    "Use Public Transport",
                    "Skip repairs for now",
                    Risk::Moderate,
                    "Using buses and metros. Inconvenient but saves money.",
                    ops(vec![Stress(S::RaiseCapped(Medium)), Add(FutureScore, -3)]),
                ),
            ],
            ..event(
                "bike_breakdown",
                "Vehicle Breakdown",
                "Your bike/scooter broke down and needs ₹3,500 for repairs.",
                "🏍️",
                EventKind::Emergency,
                Rarity::Common,
            )
        },
        LifeEvent {
            expense: Some(12_000),
            options: vec![
                opt(
                    "Buy New Phone",
                    "Get a mid-range smartphone ₹12,000",
                    Risk::Safe,
                    "New phone purchased. Stay alert next time!",
                    vec![
                        Step::Op(Spend(Balance, 12_000)),
                        Step::If {
                            cond: Cond::BalanceAtLeast(12_000),
                            then: vec![],
                            otherwise: vec![Stress(S::Set(High))],
                        },
                    ],
                ),
                opt(
                    "Buy Budget Phone",
                    "Basic phone for ₹5,000",
                    Risk::Safe,
                    "Budget phone works. Limited but functional.",
                    ops(vec![Spend(Balance, 5_000), Add(FutureScore, -2)]),
                ),
                opt(
                    "Borrow Old Phone",
                    "Use a friend's spare",
                    Risk::Moderate,
                    "Old phone works. Uncomfortable but free.",
                    ops(vec![Stress(S::RaiseCapped(Medium))]),
                ),
            ],
            ..event(
                "phone_stolen",
                "Phone Stolen",
                "Your smartphone was pickpocketed! You need a replacement.",
                "📱",
                EventKind::Emergency,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            expense: Some(6_000),
            options: vec![
                opt(
                    "Full Repair",
                    "Recovery + New SSD ₹6,000",
                    Risk::Safe,
                    "Laptop fully restored with better performance!",
                    ops(vec![Spend(Balance, 6_000), Add(FutureScore, 3)]),
                ),
                opt(
                    "SSD Only",
                    "Skip recovery, new SSD ₹4,000",
                    Risk::Moderate,
                    "Lost old data but laptop works. Back up next time!",
                    ops(vec![Spend(Balance, 4_000), Add(FutureScore, -2)]),
                ),
            ],
            ..event(
                "laptop_crash",
                "Laptop Crashed",
                "Your laptop's hard drive failed. Data recovery costs ₹2,000, new SSD costs ₹4,000.",
                "💻",
                EventKind::Emergency,
                Rarity::Uncommon,
            )
        },
    ]
}

fn opportunities() -> Vec<LifeEvent> {
    vec![
        LifeEvent {
            options: vec![
                opt(
                    "Invest ₹5,000",
                    "Start small",
                    Risk::Moderate,
                    "Smart choice! Your investment will grow over time.",
                    ops(vec![Spend(Savings, 5_000), Add(FutureScore, 15)]),
                ),
                opt(
                    "Invest ₹10,000",
                    "Go bigger",
                    Risk::Moderate,
                    "Aggressive investment! Higher potential returns.",
                    ops(vec![Spend(Savings, 10_000), Add(FutureScore, 25)]),
                ),
                opt(
                    "Skip",
                    "Not ready yet",
                    Risk::Safe,
                    "Missed opportunity. Maybe next time.",
                    ops(vec![Add(FutureScore, -2)]),
                ),
            ],
            ..event(
                "investment_opportunity",
                "Investment Opportunity",
                "A mutual fund with good track record. Minimum investment: ₹5,000.",
                "📈",
                EventKind::Opportunity,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Invest ₹3,000",
                    "Take the risk",
                    Risk::Risky,
                    "The market decided your fate...",
                    vec![Step::Chance {
                        threshold: 0.6,
                        win: vec![Add(Balance, 6_000), Add(FutureScore, 10)],
                        lose: vec![Spend(Balance, 3_000), Add(FutureScore, -5)],
                    }],
                ),
                opt(
                    "Decline Politely",
                    "Too risky",
                    Risk::Safe,
                    "Wise choice! Avoided speculative gambling.",
                    ops(vec![Add(FutureScore, 5)]),
                ),
            ],
            ..event(
                "stock_tip",
                "Hot Stock Tip",
                "A colleague shares a 'sure thing' stock tip. Could double your money... or lose it all.",
                "🎰",
                EventKind::Opportunity,
                Rarity::Rare,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Accept It",
                    "Grind through the weekend",
                    Risk::Moderate,
                    "Project completed! Earned ₹15,000 but feeling tired.",
                    ops(vec![
                        Add(Balance, 15_000),
                        Stress(S::RaiseCapped(High)),
                        Add(FutureScore, 8),
                    ]),
                ),
                opt(
                    "Negotiate Higher",
                    "Ask for ₹20,000",
                    Risk::Risky,
                    "Let's see if they accept...",
                    vec![Step::Chance {
                        threshold: 0.5,
                        win: vec![Add(Balance, 20_000), Stress(S::Set(High)), Add(FutureScore, 12)],
                        lose: vec![Add(FutureScore, -3)],
                    }],
                ),
                opt(
                    "Decline",
                    "Rest is important too",
                    Risk::Safe,
                    "Prioritized well-being. Sometimes rest is productive.",
                    ops(vec![Stress(S::RelaxFrom(High))]),
                ),
            ],
            ..event(
                "freelance_gig",
                "Freelance Project",
                "A client offers ₹15,000 for a weekend project. It will be intense work.",
                "💼",
                EventKind::Opportunity,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            min_month: Some(3),
            options: vec![
                opt(
                    "Partner Up",
                    "Invest and become co-owner",
                    Risk::Risky,
                    "Now a business owner! Passive income of ₹3,000/month.",
                    ops(vec![
                        Spend(Savings, 20_000),
                        Add(Income, 3_000),
                        Add(FutureScore, 20),
                        Stress(S::RaiseCapped(Medium)),
                    ]),
                ),
                opt(
                    "Silent Investor",
                    "Invest ₹10,000, smaller share",
                    Risk::Moderate,
                    "Smaller investment, smaller returns. ₹1,500/month passive income.",
                    ops(vec![Spend(Savings, 10_000), Add(Income, 1_500), Add(FutureScore, 10)]),
                ),
                opt(
                    "Pass",
                    "Not interested",
                    Risk::Safe,
                    "Friendship intact, no financial change.",
                    Vec::new(),
                ),
            ],
            ..event(
                "side_business",
                "Business Opportunity",
                "A friend wants to start a small online business together. Initial investment: ₹20,000.",
                "🏪",
                EventKind::Opportunity,
                Rarity::Rare,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Enroll",
                    "Invest in yourself",
                    Risk::Safe,
                    "Course completed! Future income increased by ₹1,500/month.",
                    ops(vec![Spend(Balance, 3_000), Add(FutureScore, 18), Add(Income, 1_500)]),
                ),
                opt(
                    "Maybe Later",
                    "Not a priority now",
                    Risk::Safe,
                    "No changes. Learning can wait.",
                    Vec::new(),
                ),
            ],
            ..event(
                "skill_course",
                "Skill Development",
                "An online certification course costs ₹3,000 but could boost your career.",
                "📚",
                EventKind::Opportunity,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Sign Up",
                    "Invest in health",
                    Risk::Safe,
                    "Health is wealth! Stress reduced, feeling energized.",
                    ops(vec![
                        Spend(Balance, 6_000),
                        Stress(S::RelaxFloored(Low)),
                        Add(FutureScore, 8),
                    ]),
                ),
                opt(
                    "Skip",
                    "Home workouts are free",
                    Risk::Safe,
                    "Saved money. YouTube workouts it is!",
                    Vec::new(),
                ),
            ],
            ..event(
                "gym_membership",
                "Gym Offer",
                "Annual gym membership at 50% off - ₹6,000 (usually ₹12,000).",
                "💪",
                EventKind::Opportunity,
                Rarity::Common,
            )
        },
        LifeEvent {
            min_month: Some(4),
            options: vec![
                opt(
                    "Prepare Hard",
                    "Weekend prep, stress but worth it",
                    Risk::Moderate,
                    "Interview done. Waiting for results...",
                    vec![Step::Chance {
                        threshold: 0.3,
                        win: vec![Add(Income, 8_000), Add(FutureScore, 25), Stress(S::Set(Medium))],
                        lose: vec![Stress(S::Set(High)), Add(FutureScore, 5)],
                    }],
                ),
                opt(
                    "Wing It",
                    "You know your stuff",
                    Risk::Risky,
                    "Confidence or overconfidence? Let's see...",
                    vec![Step::Chance {
                        threshold: 0.6,
                        win: vec![Add(Income, 8_000), Add(FutureScore, 20)],
                        lose: vec![Add(FutureScore, -5)],
                    }],
                ),
                opt(
                    "Decline",
                    "Not ready for more responsibility",
                    Risk::Safe,
                    "Stayed in comfort zone. Missed growth opportunity.",
                    ops(vec![Add(FutureScore, -10)]),
                ),
            ],
            ..event(
                "promotion_opportunity",
                "Promotion Interview",
                "Chance for promotion! If selected, ₹8,000/month raise. Need to prepare presentation.",
                "📊",
                EventKind::Opportunity,
                Rarity::Rare,
            )
        },
    ]
}

fn scams() -> Vec<LifeEvent> {
    vec![
        LifeEvent {
            options: vec![
                opt(
                    "Hang Up",
                    "This is suspicious",
                    Risk::Safe,
                    "Great awareness! Banks never ask for OTP on calls.",
                    ops(vec![AvoidScam, Add(FutureScore, 10)]),
                ),
                opt(
                    "Share OTP",
                    "They sound genuine",
                    Risk::Risky,
                    "SCAMMED! Lost ₹15,000. Never share OTP with anyone!",
                    ops(vec![Spend(Balance, 15_000), Stress(S::Set(Critical)), Add(FutureScore, -25)]),
                ),
            ],
            ..event(
                "scam_call",
                "Suspicious Bank Call",
                "Someone claiming to be from your bank asks for your OTP to 'verify your account'.",
                "📞",
                EventKind::Scam,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Ignore & Block",
                    "Too good to be true",
                    Risk::Safe,
                    "Smart! You can't win a lottery you never entered.",
                    ops(vec![AvoidScam, Add(FutureScore, 10)]),
                ),
                opt(
                    "Pay Fee",
                    "What if it's real?",
                    Risk::Risky,
                    "SCAMMED! Lost ₹5,000. No lottery, only scam.",
                    ops(vec![Spend(Balance, 5_000), Stress(S::Set(High)), Add(FutureScore, -15)]),
                ),
            ],
            ..event(
                "lottery_scam",
                "Lottery Winner!",
                "You received an SMS saying you won ₹5,00,000! Just pay ₹5,000 processing fee.",
                "🎉",
                EventKind::Scam,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Report as Spam",
                    "Legitimate jobs don't charge",
                    Risk::Safe,
                    "Excellent judgment! Real jobs never ask for money.",
                    ops(vec![AvoidScam, Add(FutureScore, 12)]),
                ),
                opt(
                    "Apply & Pay",
                    "Could be a real opportunity",
                    Risk::Risky,
                    "SCAMMED! Lost ₹2,000. No job, just empty promises.",
                    vec![
                        Step::Op(Spend(Balance, 2_000)),
                        Step::If {
                            cond: Cond::StressIs(Low),
                            then: vec![Stress(S::Set(Medium))],
                            otherwise: vec![Stress(S::Set(High))],
                        },
                        Step::Op(Add(FutureScore, -10)),
                    ],
                ),
            ],
            ..event(
                "job_scam",
                "Dream Job Offer",
                "Email about work-from-home job paying ₹50,000/month. Just pay ₹2,000 registration.",
                "💼",
                EventKind::Scam,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Block & Report",
                    "No guaranteed returns exist",
                    Risk::Safe,
                    "Wise choice! Guaranteed returns in crypto = scam.",
                    ops(vec![AvoidScam, Add(FutureScore, 15)]),
                ),
                opt(
                    "Invest",
                    "FOMO is real",
                    Risk::Risky,
                    "SCAMMED! Lost ₹10,000. Influencer disappeared.",
                    ops(vec![Spend(Balance, 10_000), Stress(S::Set(Critical)), Add(FutureScore, -20)]),
                ),
            ],
            ..event(
                "crypto_scam",
                "Crypto Guru DM",
                "Instagram influencer DMs you about 'guaranteed 10x returns' in crypto. Minimum ₹10,000.",
                "🪙",
                EventKind::Scam,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Politely Decline",
                    "Sounds like MLM/pyramid",
                    Risk::Safe,
                    "You recognized the pyramid scheme structure!",
                    ops(vec![AvoidScam, Add(FutureScore, 12)]),
                ),
                opt(
                    "Join the 'Team'",
                    "Trust your friend",
                    Risk::Risky,
                    "Trapped in MLM! Lost ₹15,000 and friendship strained.",
                    ops(vec![Spend(Balance, 15_000), Stress(S::Set(High)), Add(FutureScore, -18)]),
                ),
            ],
            ..event(
                "mlm_scheme",
                "Amazing Business Opportunity",
                "Old friend invites you to 'revolutionary business' meeting. Entry fee: ₹15,000.",
                "🔺",
                EventKind::Scam,
                Rarity::Rare,
            )
        },
    ]
}

fn regular_events() -> Vec<LifeEvent> {
    vec![
        LifeEvent {
            options: vec![
                opt(
                    "Save All",
                    "Add to emergency fund",
                    Risk::Safe,
                    "Excellent! Emergency fund growing strong.",
                    ops(vec![Add(Savings, 10_000), Add(FutureScore, 12)]),
                ),
                opt(
                    "50-50 Split",
                    "Save half, spend half",
                    Risk::Safe,
                    "Balanced approach! Saved ₹5,000, enjoyed ₹5,000.",
                    ops(vec![
                        Add(Savings, 5_000),
                        Add(Balance, 5_000),
                        Add(FutureScore, 5),
                        Stress(S::RelaxFrom(High)),
                    ]),
                ),
                opt(
                    "Treat Yourself",
                    "You earned it!",
                    Risk::Moderate,
                    "Enjoyed the bonus! Stress reduced significantly.",
                    ops(vec![Add(Balance, 10_000), Stress(S::Set(Low)), Add(FutureScore, -3)]),
                ),
            ],
            ..event(
                "job_bonus",
                "Performance Bonus",
                "Great news! You received a ₹10,000 bonus for excellent work.",
                "🏆",
                EventKind::Regular,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Accept",
                    "Stay where you are",
                    Risk::Safe,
                    "Rent absorbed. Monthly budget tighter.",
                    vec![
                        Step::Op(Add(Income, -2_000)),
                        Step::If {
                            cond: Cond::IncomeAbove(12_000),
                            then: vec![],
                            otherwise: vec![Stress(S::Set(High))],
                        },
                    ],
                ),
                opt(
                    "Negotiate",
                    "Try for ₹1,000 increase",
                    Risk::Moderate,
                    "Let's see how negotiation goes...",
                    vec![Step::Chance {
                        threshold: 0.4,
                        win: vec![Add(Income, -1_000), Add(FutureScore, 5)],
                        lose: vec![Add(Income, -2_000)],
                    }],
                ),
                opt(
                    "Move Out",
                    "Find cheaper place",
                    Risk::Moderate,
                    "Moving costs ₹8,000 but saves money long-term.",
                    ops(vec![Spend(Balance, 8_000), Stress(S::Set(High)), Add(FutureScore, 3)]),
                ),
            ],
            ..event(
                "rent_increase",
                "Rent Increase Notice",
                "Landlord increasing rent by ₹2,000/month from next month.",
                "🏠",
                EventKind::Regular,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Lend Full Amount",
                    "Help your friend",
                    Risk::Moderate,
                    "Money lent. Hope it comes back...",
                    vec![Step::Chance {
                        threshold: 0.3,
                        win: vec![Add(Balance, -5_000), Add(FutureScore, 5)],
                        lose: vec![Add(Balance, -5_000), Stress(S::RaiseCapped(Medium))],
                    }],
                ),
                opt(
                    "Lend ₹2,000",
                    "Partial help",
                    Risk::Moderate,
                    "Helped with what you could afford.",
                    ops(vec![Spend(Balance, 2_000)]),
                ),
                opt(
                    "Can't Help",
                    "Finances are tight",
                    Risk::Safe,
                    "Prioritized your finances. Friendship slightly strained.",
                    ops(vec![Stress(S::RaiseCapped(Medium))]),
                ),
            ],
            ..event(
                "friend_loan",
                "Friend Needs Money",
                "Close friend asks to borrow ₹5,000 urgently. Promises to return next month.",
                "🤝",
                EventKind::Regular,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Go All Out",
                    "₹15,000 for gifts & travel",
                    Risk::Moderate,
                    "Family happy! Great memories made.",
                    vec![
                        Step::Op(Spend(Balance, 15_000)),
                        Step::If {
                            cond: Cond::BalanceAtLeast(15_000),
                            then: vec![Stress(S::Set(Low))],
                            otherwise: vec![Stress(S::Set(High))],
                        },
                        Step::Op(Add(FutureScore, 3)),
                    ],
                ),
                opt(
                    "Modest Approach",
                    "₹8,000 budget",
                    Risk::Safe,
                    "Attended within budget. Family understands.",
                    ops(vec![Spend(Balance, 8_000)]),
                ),
                opt(
                    "Send Gift Only",
                    "₹3,000 gift, skip travel",
                    Risk::Safe,
                    "Sent wishes remotely. Some family disappointed.",
                    ops(vec![Spend(Balance, 3_000), Stress(S::RaiseCapped(Medium))]),
                ),
            ],
            ..event(
                "family_wedding",
                "Cousin's Wedding",
                "Cousin getting married! Expected gifts and travel: ₹8,000-15,000.",
                "💒",
                EventKind::Regular,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Pay Immediately",
                    "Avoid late fees",
                    Risk::Safe,
                    "Bill paid. Check AC usage next month!",
                    ops(vec![Spend(Balance, 4_500), Add(FutureScore, 2)]),
                ),
                opt(
                    "Dispute Bill",
                    "Request meter reading check",
                    Risk::Moderate,
                    "Disputing with the electricity board...",
                    vec![Step::Chance {
                        threshold: 0.5,
                        win: vec![Add(Balance, -2_000), Add(FutureScore, 5)],
                        lose: vec![Add(Balance, -5_000), Stress(S::RaiseCapped(Medium))],
                    }],
                ),
            ],
            ..event(
                "electricity_bill",
                "Surprise Bill",
                "Electricity bill way higher than usual: ₹4,500 (normally ₹1,500).",
                "⚡",
                EventKind::Regular,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Get Checked",
                    "Prevention is better",
                    Risk::Safe,
                    "Health report clear! Peace of mind.",
                    ops(vec![
                        Spend(Balance, 2_500),
                        Add(FutureScore, 10),
                        Stress(S::RelaxFrom(Critical)),
                    ]),
                ),
                opt(
                    "Skip This Year",
                    "Feeling healthy anyway",
                    Risk::Moderate,
                    "Saved money but skipped important health check.",
                    ops(vec![Add(FutureScore, -5)]),
                ),
            ],
            ..event(
                "health_checkup",
                "Annual Health Checkup",
                "It's been a year. Full body checkup costs ₹2,500.",
                "🏥",
                EventKind::Regular,
                Rarity::Uncommon,
            )
        },
        LifeEvent {
            min_month: Some(2),
            options: vec![
                opt(
                    "Hire CA",
                    "Professional help ₹1,000",
                    Risk::Safe,
                    "Filed correctly! Potential refund coming.",
                    ops(vec![Spend(Balance, 1_000), Add(FutureScore, 5)]),
                ),
                opt(
                    "DIY Filing",
                    "Use online portal",
                    Risk::Moderate,
                    "Attempting to file yourself...",
                    vec![Step::Chance {
                        threshold: 0.3,
                        win: vec![Add(FutureScore, 8)],
                        lose: vec![Spend(Balance, 500), Stress(S::RaiseCapped(Medium))],
                    }],
                ),
            ],
            ..event(
                "tax_season",
                "Tax Filing Due",
                "Income tax return deadline approaching. CA charges ₹1,000 or file yourself.",
                "📋",
                EventKind::Regular,
                Rarity::Uncommon,
            )
        },
    ]
}

fn random_encounters() -> Vec<LifeEvent> {
    vec![
        LifeEvent {
            options: vec![
                opt(
                    "Return It",
                    "Find the owner",
                    Risk::Safe,
                    "Owner grateful! Good karma and self-respect boost.",
                    ops(vec![Add(FutureScore, 15), Stress(S::RelaxFrom(High))]),
                ),
                opt(
                    "Keep the Cash",
                    "Finders keepers",
                    Risk::Moderate,
                    "₹2,000 richer but conscience heavier.",
                    ops(vec![Add(Balance, 2_000), Add(FutureScore, -8)]),
                ),
            ],
            ..event(
                "found_wallet",
                "Found a Wallet",
                "Found a wallet with ₹2,000 cash and an ID card on the street.",
                "👛",
                EventKind::Random,
                Rarity::Rare,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Treat Yourself",
                    "Life's small pleasures",
                    Risk::Safe,
                    "Delicious! Small joys matter.",
                    ops(vec![Spend(Balance, 200), Stress(S::RelaxFloored(Medium))]),
                ),
                opt(
                    "Walk Past",
                    "Save the money",
                    Risk::Safe,
                    "Resisted temptation. ₹200 saved!",
                    Vec::new(),
                ),
            ],
            ..event(
                "street_food",
                "Street Food Craving",
                "Delicious street food cart nearby. ₹200 for amazing snacks.",
                "🍜",
                EventKind::Random,
                Rarity::Common,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "₹1,000 Voucher",
                    "Shopping credit",
                    Risk::Safe,
                    "Nice! Free shopping money.",
                    ops(vec![Add(Balance, 1_000), Stress(S::RelaxFrom(High))]),
                ),
                opt(
                    "Mystery Box",
                    "Could be amazing or meh",
                    Risk::Moderate,
                    "Opening the mystery box...",
                    vec![Step::Chance {
                        threshold: 0.5,
                        win: vec![Add(Balance, 3_000)],
                        lose: vec![Add(Balance, 500)],
                    }],
                ),
            ],
            ..event(
                "lucky_draw",
                "Mall Lucky Draw",
                "Won a lucky draw at the mall! Choose your prize.",
                "🎁",
                EventKind::Random,
                Rarity::Rare,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Fancy Dinner",
                    "₹1,500 but good times",
                    Risk::Safe,
                    "Great conversation! Networking and memories.",
                    ops(vec![
                        Spend(Balance, 1_500),
                        Stress(S::RelaxFloored(Low)),
                        Add(FutureScore, 3),
                    ]),
                ),
                opt(
                    "Suggest Chai",
                    "₹100 at tea stall",
                    Risk::Safe,
                    "Simple catch-up. Budget-friendly bonding.",
                    ops(vec![Spend(Balance, 100), Stress(S::RelaxFrom(High))]),
                ),
                opt(
                    "Rain Check",
                    "Too busy right now",
                    Risk::Safe,
                    "Postponed meetup. Friend understands.",
                    Vec::new(),
                ),
            ],
            ..event(
                "old_friend",
                "Old Friend Meetup",
                "Bumped into college friend. They suggest dinner at a nice restaurant.",
                "🍽️",
                EventKind::Random,
                Rarity::Common,
            )
        },
    ]
}

fn boss_events() -> Vec<LifeEvent> {
    vec![
        LifeEvent {
            min_month: Some(5),
            options: vec![
                opt(
                    "Accept & Job Hunt",
                    "Take severance, find new job",
                    Risk::Moderate,
                    "Severance received. Time to job hunt intensively!",
                    ops(vec![
                        Add(Balance, 50_000),
                        Set(Income, 0),
                        Stress(S::Set(High)),
                        Add(FutureScore, -10),
                    ]),
                ),
                opt(
                    "Negotiate More",
                    "Ask for better package",
                    Risk::Risky,
                    "Negotiating with HR...",
                    vec![Step::Chance {
                        threshold: 0.4,
                        win: vec![Add(Balance, 75_000), Set(Income, 0), Stress(S::Set(High))],
                        lose: vec![Add(Balance, 30_000), Set(Income, 0), Stress(S::Set(Critical))],
                    }],
                ),
            ],
            ..event(
                "job_loss",
                "Layoff Notice",
                "Company downsizing. You have 1 month notice. ₹50,000 severance offered.",
                "💼",
                EventKind::Boss,
                Rarity::Legendary,
            )
        },
        LifeEvent {
            min_month: Some(6),
            options: vec![
                opt(
                    "Save It All",
                    "Emergency fund boost",
                    Risk::Safe,
                    "Massive savings boost! Financial security improved.",
                    ops(vec![Add(Savings, 100_000), Add(FutureScore, 30)]),
                ),
                opt(
                    "Invest It",
                    "Put in mutual funds",
                    Risk::Moderate,
                    "Invested wisely! Long-term growth secured.",
                    ops(vec![Add(Savings, 50_000), Add(FutureScore, 40)]),
                ),
                opt(
                    "Lifestyle Upgrade",
                    "New phone, clothes, vacation",
                    Risk::Risky,
                    "Living large! Enjoyed the windfall.",
                    ops(vec![Add(Balance, 100_000), Stress(S::Set(Low)), Add(FutureScore, 5)]),
                ),
            ],
            ..event(
                "inheritance",
                "Unexpected Inheritance",
                "Distant relative passed away. You inherited ₹1,00,000.",
                "📜",
                EventKind::Boss,
                Rarity::Legendary,
            )
        },
        LifeEvent {
            options: vec![
                opt(
                    "Claim Insurance",
                    "Wait for 50% coverage",
                    Risk::Moderate,
                    "Insurance claim filed. Paid ₹12,500 from pocket.",
                    ops(vec![
                        Spend(Balance, 12_500),
                        Spend(Savings, 12_500),
                        Stress(S::Set(High)),
                        Add(FutureScore, -5),
                    ]),
                ),
                opt(
                    "Pay Fully",
                    "Skip insurance hassle",
                    Risk::Safe,
                    "Paid ₹25,000 fully. Recovery focus now.",
                    ops(vec![Spend(Balance, 25_000), Stress(S::Set(High)), Add(FutureScore, -10)]),
                ),
            ],
            ..event(
                "accident",
                "Road Accident",
                "Minor accident. Medical bills ₹25,000. Insurance may cover 50%.",
                "🚑",
                EventKind::Boss,
                Rarity::Legendary,
            )
        },
    ]
}
