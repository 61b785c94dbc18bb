//! Content catalog — static mapping from category id to the reference text
//! used as grounding context for roadmap generation. Pure data; the only
//! behavior is lookup-with-default.

/// Category used when a requested id is not in the catalog. Lookups never
/// fail outright on an unknown id.
pub const DEFAULT_CATEGORY: &str = "money-basics";

/// All category ids in the catalog, in curriculum order.
pub const CATEGORY_IDS: &[&str] = &[
    "money-basics",
    "banking",
    "digital-payments",
    "saving-investing",
    "loans-credit",
    "safety-protection",
];

const MONEY_BASICS: &str = r#"
1.1 Income & Expenses
Section A: Understanding Income (Money Coming In)
Income is any money you receive. It doesn't matter how it comes — what matters is how regular and reliable it is.
Main Types of Income: Active income (salary, wages), Business income (profits), Passive income (interest, rent).
Gross vs Take-Home: Always plan expenses using take-home income (after tax/deductions), not gross.
Fixed vs Variable Income: Fixed is easier to manage; Variable needs buffer.
Section B: Understanding Expenses
Needs (Essentials: food, rent) vs Wants (Comforts: eating out). Confusing wants as needs is a major mistake.
Fixed vs Variable Expenses.
Expense Leakage: Small daily expenses (Latte factor) add up. If you don't track expenses, money disappears.

1.2 Budgeting & Cash Flow
Section A: Budgeting
A budget is a plan for money before spending it. Income - Planned Expenses - Planned Savings = Control.
Rules: Spend less than earned. Save fixed amount monthly. Keep lifestyle checks.
Structure: Needs / Wants / Savings.
Section B: Cash Flow
Cash flow is timing. You can earn well but be broke if income comes once but expenses are daily.
Positive Cash Flow: Money in before money out. Negative Cash Flow: Relying on debt/credit.

1.3 Inflation & Value of Money
Section A: Inflation
Prices increase over time. ₹100 today buys less next year. Ignoring inflation is dangerous.
Section B: Saving isn't Enough
Idle money loses value due to inflation. Saving protects money; Growth (Investing) protects value.
"#;

const BANKING: &str = r#"
2.1 Bank Accounts
Section A: Types
Savings (Daily use, small interest), Salary (Zero balance, tied to job), Current (Business, no interest).
Section B: Maintenance
Minimum Balance penalties. Bank statements show money flow and hidden charges. Reading statements is mandatory.

2.2 How Banks Earn
Section A: Spread
Banks take deposits (pay low interest) and lend loans (charge high interest). The difference is their profit.
Section B: Fees
Interest on loans, maintenance charges, late penalties, ATM fees. Small fees ignored become big losses.

2.3 Everyday Operations
Section A: Tools
ATM, Cheques, Net Banking. Digital is easy but needs care.
Section B: Safety
KYC (Know Your Customer), PAN. Never share OTP/PIN. Safety is user responsibility.
"#;

const DIGITAL_PAYMENTS: &str = r#"
3.1 How UPI Works
Section A: Basics
Unified Payments Interface. Instant bank-to-bank. Apps don't hold money; banks do. Connects Bank + Mobile + UPI ID.
Section B: Apps & Limits
Apps (GPay, PhonePe) are interfaces. Limits exist for security (Per transaction / Daily).

3.2 Transfers & Payments
Section A: Methods
UPI (Small/Daily/Fast), IMPS (Instant), NEFT (Batches), RTGS (Large amounts).
Section B: QR Codes
Static (Small shops) vs Dynamic (Auto-amount). Always verify name/amount. Never scan to RECEIVE money.

3.3 Failed Payments
Section A: Failure
Network/Server issues. Money isn't lost; auto-reverses.
Section B: Refunds
Wait for auto-refund. Raise complaint with Transaction ID.
"#;

const SAVING_INVESTING: &str = r#"
4.1 Saving Options
Section A: Priority
Saving creates stability and mental peace. Habit > Amount.
Section B: Tools
Savings Account (Liquidity), Fixed Deposit (Lock-in, higher interest), Recurring Deposit (Discipline).

4.2 Returns & Compounding
Section A: Returns
Profit generated. Depends on Time, Rate, Consistency. High return = High risk.
Section B: Compounding
Earning interest on interest. Time is the multiplier. Start early.

4.3 Risk Basics
Section A: Types
Low, Medium, High. No option is risk-free.
Section B: Balance
Inflation risk vs Market risk. Short term = Low risk. Long term = Controlled risk.
"#;

const LOANS_CREDIT: &str = r#"
5.1 Types of Loans
Section A: Definition
Borrowed money returned with interest. Tool vs Trap.
Section B: Types
Personal (Unsecured, High Interest), Home (Secured, Long term), Education (Skill investment), Vehicle (Depreciating asset).

5.2 EMIs & Interest
Section A: EMI
Principal + Interest. Early EMIs are mostly interest.
Section B: Calculation
Flat rate (Expensive) vs Reducing Balance (Cheaper). Compare total repayment amount.

5.3 Credit Cards & Score
Section A: Cards
Short term borrowing. Pay full = No interest. Pay minimum = Debt trap.
Section B: CIBIL/Score
Repayment history. Good score = Cheaper loans. Bad score = Rejection. Privilege, not income.
"#;

const SAFETY_PROTECTION: &str = r#"
6.1 Digital Safety
Section A: Fraud
Social engineering (Greed/Panic). Fake refunds, OTP scams, Phishing.
Section B: Action
Block card/account immediately. Report to bank. Speed limits damage.

6.2 Tax Basics
Section A: Purpose
Funds public services. Mandatory.
Section B: Terms
PAN (Tracking), Income Tax (On earnings), Form 16 (Salary proof).

6.3 Insurance
Section A: Purpose
Protection, not investment. Covers shocks.
Section B: Essentials
Health (Hospital bills), Term Life (Dependents). Nominee details are crucial.
"#;

/// Returns the grounding text for a category, falling back to the default
/// category when the id is unknown.
pub fn source_material(category_id: &str) -> &'static str {
    match category_id {
        "money-basics" => MONEY_BASICS,
        "banking" => BANKING,
        "digital-payments" => DIGITAL_PAYMENTS,
        "saving-investing" => SAVING_INVESTING,
        "loans-credit" => LOANS_CREDIT,
        "safety-protection" => SAFETY_PROTECTION,
        _ => MONEY_BASICS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_category_has_material() {
        for id in CATEGORY_IDS {
            assert!(
                !source_material(id).trim().is_empty(),
                "category {id} must have grounding text"
            );
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_default() {
        assert_eq!(source_material("crypto-futures"), source_material(DEFAULT_CATEGORY));
        assert_eq!(source_material(""), source_material("money-basics"));
    }

    #[test]
    fn test_categories_are_distinct_texts() {
        assert_ne!(source_material("banking"), source_material("loans-credit"));
        assert!(source_material("digital-payments").contains("UPI"));
        assert!(source_material("safety-protection").contains("Insurance"));
    }
}
