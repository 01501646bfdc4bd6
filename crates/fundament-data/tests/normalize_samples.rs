//! Normalization of complete provider records for every data kind.

#![recursion_limit = "256"]

use fundament_data::{DataRequest, Period};
use polars::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

fn profile_sample() -> Value {
    json!([{
        "symbol": "AAPL",
        "price": 189.98,
        "beta": 1.29,
        "volAvg": 54318580,
        "mktCap": 2954506960000i64,
        "lastDiv": 0.96,
        "range": "164.08-199.62",
        "changes": -2.55,
        "companyName": "Apple Inc.",
        "currency": "USD",
        "cik": "0000320193",
        "isin": "US0378331005",
        "cusip": "037833100",
        "exchange": "NASDAQ Global Select",
        "exchangeShortName": "NASDAQ",
        "industry": "Consumer Electronics",
        "website": "https://www.apple.com",
        "description": "Apple Inc. designs, manufactures, and markets smartphones.",
        "ceo": "Mr. Timothy D. Cook",
        "sector": "Technology",
        "country": "US",
        "fullTimeEmployees": "161000",
        "phone": "408 996 1010",
        "address": "One Apple Park Way",
        "city": "Cupertino",
        "state": "CA",
        "zip": "95014",
        "dcfDiff": 45.34,
        "dcf": 144.64,
        "image": "https://financialmodelingprep.com/image-stock/AAPL.png",
        "ipoDate": "1980-12-12",
        "defaultImage": false,
        "isEtf": false,
        "isActivelyTrading": true,
        "isAdr": false,
        "isFund": false,
        "listingNote": "primary"
    }])
}

fn income_statement_sample() -> Value {
    json!([{
        "date": "2023-09-30",
        "symbol": "AAPL",
        "reportedCurrency": "USD",
        "cik": "0000320193",
        "fillingDate": "2023-11-03",
        "acceptedDate": "2023-11-02 18:08:27",
        "calendarYear": "2023",
        "period": "Q4",
        "revenue": 89498000000i64,
        "costOfRevenue": 49071000000i64,
        "grossProfit": 40427000000i64,
        "grossProfitRatio": 0.4517,
        "researchAndDevelopmentExpenses": 7307000000i64,
        "generalAndAdministrativeExpenses": 0,
        "sellingAndMarketingExpenses": 0,
        "sellingGeneralAndAdministrativeExpenses": 6151000000i64,
        "otherExpenses": 0,
        "operatingExpenses": 13458000000i64,
        "costAndExpenses": 62529000000i64,
        "interestExpense": 1002000000i64,
        "depreciationAndAmortization": 2653000000i64,
        "ebitda": 29622000000i64,
        "ebitdaratio": 0.331,
        "operatingIncome": 26969000000i64,
        "operatingIncomeRatio": 0.3013,
        "totalOtherIncomeExpensesNet": 29000000,
        "incomeBeforeTax": 26998000000i64,
        "incomeBeforeTaxRatio": 0.3017,
        "incomeTaxExpense": 4042000000i64,
        "netIncome": 22956000000i64,
        "netIncomeRatio": 0.2565,
        "eps": 1.47,
        "epsdiluted": 1.46,
        "weightedAverageShsOut": 15599434000i64,
        "weightedAverageShsOutDil": 15672400000i64,
        "link": "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/0000320193-23-000106-index.htm",
        "finalLink": "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/aapl-20230930.htm",
        "segmentNote": "restated"
    }])
}

fn balance_sheet_sample() -> Value {
    json!([{
        "date": "2023-09-30",
        "symbol": "AAPL",
        "reportedCurrency": "USD",
        "cik": "0000320193",
        "fillingDate": "2023-11-03",
        "acceptedDate": "2023-11-02 18:08:27",
        "calendarYear": "2023",
        "period": "Q4",
        "cashAndCashEquivalents": 29965000000i64,
        "shortTermInvestments": 31590000000i64,
        "cashAndShortTermInvestments": 61555000000i64,
        "netReceivables": 60985000000i64,
        "inventory": 6331000000i64,
        "otherCurrentAssets": 14695000000i64,
        "totalCurrentAssets": 143566000000i64,
        "propertyPlantEquipmentNet": 54376000000i64,
        "goodwill": 0,
        "intangibleAssets": 0,
        "goodwillAndIntangibleAssets": 0,
        "longTermInvestments": 100544000000i64,
        "taxAssets": 17852000000i64,
        "otherNonCurrentAssets": 36245000000i64,
        "totalNonCurrentAssets": 209017000000i64,
        "otherAssets": 0,
        "totalAssets": 352583000000i64,
        "accountPayables": 62611000000i64,
        "shortTermDebt": 15807000000i64,
        "taxPayables": 8819000000i64,
        "deferredRevenue": 8061000000i64,
        "otherCurrentLiabilities": 50010000000i64,
        "totalCurrentLiabilities": 145308000000i64,
        "longTermDebt": 95281000000i64,
        "deferredRevenueNonCurrent": 0,
        "deferredTaxLiabilitiesNonCurrent": 0,
        "otherNonCurrentLiabilities": 49848000000i64,
        "totalNonCurrentLiabilities": 145129000000i64,
        "otherLiabilities": 0,
        "capitalLeaseObligations": 12842000000i64,
        "totalLiabilities": 290437000000i64,
        "preferredStock": 0,
        "commonStock": 73812000000i64,
        "retainedEarnings": -214000000i64,
        "accumulatedOtherComprehensiveIncomeLoss": -11452000000i64,
        "othertotalStockholdersEquity": 0,
        "totalStockholdersEquity": 62146000000i64,
        "totalEquity": 62146000000i64,
        "totalLiabilitiesAndStockholdersEquity": 352583000000i64,
        "minorityInterest": 0,
        "totalLiabilitiesAndTotalEquity": 352583000000i64,
        "totalInvestments": 132134000000i64,
        "totalDebt": 123930000000i64,
        "netDebt": 93965000000i64,
        "link": "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/0000320193-23-000106-index.htm",
        "finalLink": "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/aapl-20230930.htm",
        "segmentNote": "restated"
    }])
}

fn cash_flow_sample() -> Value {
    json!([{
        "date": "2023-09-30",
        "symbol": "AAPL",
        "reportedCurrency": "USD",
        "cik": "0000320193",
        "fillingDate": "2023-11-03",
        "acceptedDate": "2023-11-02 18:08:27",
        "calendarYear": "2023",
        "period": "Q4",
        "netIncome": 22956000000i64,
        "depreciationAndAmortization": 2653000000i64,
        "deferredIncomeTax": 0,
        "stockBasedCompensation": 2625000000i64,
        "changeInWorkingCapital": -1931000000i64,
        "accountsReceivables": -10485000000i64,
        "inventory": -1469000000i64,
        "accountsPayables": 16603000000i64,
        "otherWorkingCapital": -6580000000i64,
        "otherNonCashItems": -753000000i64,
        "netCashProvidedByOperatingActivities": 21598000000i64,
        "investmentsInPropertyPlantAndEquipment": -2163000000i64,
        "acquisitionsNet": 0,
        "purchasesOfInvestments": -10388000000i64,
        "salesMaturitiesOfInvestments": 13776000000i64,
        "otherInvestingActivites": -394000000i64,
        "netCashUsedForInvestingActivites": 831000000i64,
        "debtRepayment": -1200000000i64,
        "commonStockIssued": 0,
        "commonStockRepurchased": -21003000000i64,
        "dividendsPaid": -3758000000i64,
        "otherFinancingActivites": -1604000000i64,
        "netCashUsedProvidedByFinancingActivities": -23153000000i64,
        "effectOfForexChangesOnCash": 0,
        "netChangeInCash": -724000000i64,
        "cashAtEndOfPeriod": 30737000000i64,
        "cashAtBeginningOfPeriod": 31461000000i64,
        "operatingCashFlow": 21598000000i64,
        "capitalExpenditure": -2163000000i64,
        "freeCashFlow": 19435000000i64,
        "link": "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/0000320193-23-000106-index.htm",
        "finalLink": "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/aapl-20230930.htm",
        "segmentNote": "restated"
    }])
}

fn historical_prices_sample() -> Value {
    json!({
        "symbol": "AAPL",
        "historical": [{
            "date": "2024-01-02",
            "open": 187.15,
            "high": 188.44,
            "low": 183.89,
            "close": 185.64,
            "adjClose": 185.2,
            "volume": 82488700,
            "unadjustedVolume": 82488700,
            "change": -1.51,
            "changePercent": -0.807,
            "vwap": 185.99,
            "label": "January 02, 24",
            "changeOverTime": -0.00807,
            "sessionNote": "regular"
        }]
    })
}

const PROFILE_COLUMNS: &[&str] = &[
    "ticker",
    "price",
    "beta",
    "vol_avg",
    "market_cap",
    "last_dividend",
    "price_range",
    "price_changes",
    "name",
    "currency",
    "cik",
    "isin",
    "cusip",
    "exchange_name",
    "exchange_ticker",
    "industry",
    "website",
    "description",
    "ceo",
    "sector",
    "country",
    "num_full_time_employees",
    "phone",
    "address",
    "city",
    "state",
    "zip",
    "dcf_diff",
    "dcf",
    "image_url",
    "ipo_date",
    "image_default",
    "is_etf",
    "is_actively_trading",
    "is_adr",
    "is_fund",
    "listingNote",
];

const INCOME_STATEMENT_COLUMNS: &[&str] = &[
    "date",
    "ticker",
    "currency",
    "cik",
    "filing_date",
    "accepted_date",
    "year",
    "period",
    "revenue",
    "cost_of_revenue",
    "gross_profit",
    "gross_profit_ratio",
    "research_and_development_expenses",
    "general_and_administrative_expenses",
    "selling_and_marketing_expenses",
    "selling_general_and_administrative_expenses",
    "other_expenses",
    "operating_expenses",
    "cost_and_expenses",
    "interest_expenses",
    "depreciation_and_amortization",
    "ebitda",
    "ebitda_ratio",
    "operating_income",
    "operating_income_ratio",
    "net_total_other_income_expenses",
    "income_before_tax",
    "income_before_tax_ratio",
    "income_tax_expenses",
    "net_income",
    "net_income_ratio",
    "eps",
    "eps_diluted",
    "weighted_average_shares_outstanding",
    "weighted_average_shares_outstanding_diluted",
    "filing_link",
    "final_filing_link",
    "segmentNote",
];

const BALANCE_SHEET_COLUMNS: &[&str] = &[
    "date",
    "ticker",
    "currency",
    "cik",
    "filing_date",
    "accepted_date",
    "year",
    "period",
    "cash_and_cash_equivalents",
    "short_term_investments",
    "cash_and_short_term_investments",
    "net_receivables",
    "inventory",
    "other_current_assets",
    "total_current_assets",
    "net_property_plant_and_equipment",
    "goodwill",
    "intangible_assets",
    "goodwill_and_intangible_assets",
    "long_term_investments",
    "tax_assets",
    "other_noncurrent_assets",
    "total_noncurrent_assets",
    "other_assets",
    "total_assets",
    "accounts_payable",
    "short_term_debt",
    "tax_payables",
    "deferred_revenue",
    "other_current_liabilities",
    "total_current_liabilities",
    "long_term_debt",
    "deferred_noncurrent_revenue",
    "deferred_noncurrent_tax_liabilities",
    "other_noncurrent_liabilities",
    "total_noncurrent_liabilities",
    "other_liabilities",
    "capital_lease_obligations",
    "total_liabilities",
    "preferred_stock",
    "common_stock",
    "retained_earnings",
    "accumulated_other_comprehensive_income_loss",
    "other_total_stockholders_equity",
    "total_stockholders_equity",
    "total_equity",
    "total_liabilities_and_stockholders_equity",
    "minority_interest",
    "total_liabilities_and_total_equity",
    "total_investments",
    "total_debt",
    "net_debt",
    "filing_link",
    "final_filing_link",
    "segmentNote",
];

const CASH_FLOW_COLUMNS: &[&str] = &[
    "date",
    "ticker",
    "currency",
    "cik",
    "filing_date",
    "accepted_date",
    "year",
    "period",
    "net_income",
    "depreciation_and_amortization",
    "deferred_income_tax",
    "stock_based_compensation",
    "change_in_working_capital",
    "accounts_receivable",
    "inventory",
    "accounts_payable",
    "other_working_capital",
    "other_noncash_items",
    "net_cash_provided_by_operating_activities",
    "investments_in_property_plant_and_equipment",
    "net_acquisitions",
    "purchases_of_investments",
    "sales_and_maturities_of_investments",
    "other_investing_activities",
    "net_cash_used_for_investing_activities",
    "debt_repayment",
    "common_stock_issued",
    "common_stock_repurchased",
    "dividends_paid",
    "other_financing_activities",
    "net_cash_used_provided_by_financing_activities",
    "effect_of_forex_changes_on_cash",
    "net_change_in_cash",
    "cash_at_end",
    "cash_at_beginning",
    "operating_cash_flow",
    "capital_expenditure",
    "free_cash_flow",
    "filing_link",
    "final_filing_link",
    "segmentNote",
];

const HISTORICAL_PRICES_COLUMNS: &[&str] = &[
    "date",
    "open",
    "high",
    "low",
    "close",
    "adjusted_close",
    "volume",
    "unadjusted_volume",
    "change",
    "change_percent",
    "vwap",
    "label",
    "change_over_time",
    "sessionNote",
];

#[rstest]
#[case::profile(DataRequest::profile("AAPL").unwrap(), profile_sample(), PROFILE_COLUMNS)]
#[case::income_statement(
    DataRequest::income_statement("AAPL", Period::Quarter).unwrap(),
    income_statement_sample(),
    INCOME_STATEMENT_COLUMNS
)]
#[case::balance_sheet(
    DataRequest::balance_sheet("AAPL", Period::Quarter).unwrap(),
    balance_sheet_sample(),
    BALANCE_SHEET_COLUMNS
)]
#[case::cash_flow(
    DataRequest::cash_flow("AAPL", Period::Quarter).unwrap(),
    cash_flow_sample(),
    CASH_FLOW_COLUMNS
)]
#[case::historical_prices(
    DataRequest::historical_prices("AAPL", None).unwrap(),
    historical_prices_sample(),
    HISTORICAL_PRICES_COLUMNS
)]
fn test_every_provider_field_is_renamed(
    #[case] request: DataRequest,
    #[case] raw: Value,
    #[case] expected: &[&str],
) {
    let frame = request.normalize(&raw).unwrap();

    assert_eq!(frame.height(), 1);
    assert_eq!(frame.get_column_names_str(), expected.to_vec());
}

#[rstest]
#[case(DataRequest::income_statement("AAPL", Period::Quarter).unwrap(), income_statement_sample())]
#[case(DataRequest::balance_sheet("AAPL", Period::Quarter).unwrap(), balance_sheet_sample())]
#[case(DataRequest::cash_flow("AAPL", Period::Quarter).unwrap(), cash_flow_sample())]
#[case(DataRequest::historical_prices("AAPL", None).unwrap(), historical_prices_sample())]
fn test_time_series_samples_are_date_indexed(#[case] request: DataRequest, #[case] raw: Value) {
    let frame = request.normalize(&raw).unwrap();
    let date = frame.column("date").unwrap();

    assert_eq!(date.dtype(), &DataType::Date);
    assert_eq!(date.null_count(), 0);
}

#[test]
fn test_profile_sample_value_types() {
    let request = DataRequest::profile("AAPL").unwrap();
    let frame = request.normalize(&profile_sample()).unwrap();

    assert_eq!(frame.column("market_cap").unwrap().dtype(), &DataType::Int64);
    assert_eq!(frame.column("beta").unwrap().dtype(), &DataType::Float64);
    assert_eq!(frame.column("is_etf").unwrap().dtype(), &DataType::Boolean);
    assert_eq!(
        frame.column("listingNote").unwrap().str().unwrap().get(0),
        Some("primary")
    );
}
