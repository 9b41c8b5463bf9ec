//! Built-in answers. This table is always available, whatever happens to the
//! external knowledge file.

pub const AADHAAR: &str = r#"Aadhaar Card Application Process:

SUMMARY: Aadhaar is a 12-digit unique identification number issued by UIDAI to Indian residents based on biometric and demographic data.

STEP-BY-STEP PROCEDURE:
1. Locate the nearest Aadhaar Enrolment Centre using the UIDAI website
2. Fill the enrolment form with accurate details
3. Submit required documents (POI, POA, DOB proof)
4. Provide biometric data (10 fingerprints, iris scan, photograph)
5. Verify details and submit the application
6. Collect the enrolment slip with your EID number
7. Track status online after 60 days

REQUIRED DOCUMENTS:
- Proof of Identity: Passport, PAN card, Voter ID, Driving License, Birth Certificate
- Proof of Address: Passport, Bank statement, Utility bills, Ration card, Property documents
- Date of Birth: Birth certificate, 10th marksheet, Passport, PAN card

PROCESSING TIME & FEES:
- Processing: 60-90 days
- Enrolment: FREE for first time
- Updates: ₹50 (demographic), ₹100 (biometric)

CONTACT INFORMATION:
- Website: uidai.gov.in
- Helpline: 1947
- Email: help@uidai.gov.in"#;

pub const PAN_CARD: &str = r#"PAN Card Application Process:

SUMMARY: Permanent Account Number (PAN) is a 10-character alphanumeric identifier issued by the Income Tax Department for tax-related transactions.

STEP-BY-STEP PROCEDURE:
1. Visit the NSDL/UTIITSL website or an authorised centre
2. Fill Form 49A (Indian citizens) or 49AA (foreign citizens)
3. Attach required documents and photographs
4. Pay the application fee
5. Submit the application online or offline
6. Track application status using the acknowledgement number
7. Receive the PAN card by post within 15-20 days

REQUIRED DOCUMENTS:
- Identity Proof: Aadhaar, Passport, Voter ID, Driving License
- Address Proof: Aadhaar, Passport, Bank statement, Utility bills
- Date of Birth: Birth certificate, 10th marksheet, Passport
- Photographs: 2 recent passport-size photos

PROCESSING TIME & FEES:
- Processing: 15-20 days
- Normal: ₹107 (online), ₹114 (offline)
- Tatkal: ₹1,020 (online), ₹1,028 (offline)

CONTACT INFORMATION:
- Website: incometaxindia.gov.in
- NSDL: tin-nsdl.com
- UTIITSL: utiitsl.com
- Helpline: 020-27218080"#;

pub const VOTER_ID: &str = r#"Voter ID Card Application Process:

SUMMARY: Voter ID (EPIC) is an identity document issued by the Election Commission of India to eligible citizens for voting in elections.

STEP-BY-STEP PROCEDURE:
1. Visit the National Voters' Service Portal (nvsp.in)
2. Fill online Form 6 for new registration
3. Upload required documents and photograph
4. Submit the application online
5. Print the acknowledgement receipt
6. Booth Level Officer (BLO) verification
7. Receive the Voter ID card within 30 days

REQUIRED DOCUMENTS:
- Age Proof: Birth certificate, 10th marksheet, Passport, Driving License
- Address Proof: Aadhaar, Passport, Bank statement, Utility bills, Ration card
- Photograph: Recent passport-size photo

PROCESSING TIME & FEES:
- Processing: 30 days
- Fees: FREE
- Duplicate card: ₹25

CONTACT INFORMATION:
- Website: nvsp.in
- Helpline: 1950
- Email: complaints@eci.gov.in"#;

pub const AYUSHMAN_BHARAT: &str = r#"Ayushman Bharat Pradhan Mantri Jan Arogya Yojana (PM-JAY):

SUMMARY: The world's largest health insurance scheme, providing ₹5 lakh annual coverage to over 10 crore poor and vulnerable families.

STEP-BY-STEP PROCEDURE:
1. Check eligibility using the SECC 2011 database
2. Visit the nearest Common Service Centre (CSC)
3. Provide Aadhaar number and family details
4. Complete biometric authentication
5. Generate the Ayushman card instantly
6. Use the card at empanelled hospitals for cashless treatment

REQUIRED DOCUMENTS:
- Aadhaar Card: Mandatory for all family members
- Ration Card: For family verification
- Mobile Number: For OTP verification

PROCESSING TIME & FEES:
- Card Generation: Instant at CSC
- Fees: Completely FREE
- Coverage: ₹5 lakh per family per year

CONTACT INFORMATION:
- Website: pmjay.gov.in
- Helpline: 14555
- Email: info@nha.gov.in"#;

pub const GRIEVANCE_REDRESSAL: &str = r#"Public Grievance Redressal System:

SUMMARY: A centralised platform for citizens to lodge complaints against government departments and track resolution status.

STEP-BY-STEP PROCEDURE:
1. Visit the CPGRAMS portal (pgportal.gov.in)
2. Register with mobile number and email
3. Log in and click 'Lodge Grievance'
4. Select the ministry/department
5. Provide a detailed complaint with supporting documents
6. Submit and note the registration number
7. Track status regularly using the registration number

REQUIRED DOCUMENTS:
- Supporting Evidence: Photos, documents related to the grievance
- Identity Proof: Any government ID for verification
- Contact Details: Valid mobile and email

PROCESSING TIME & FEES:
- Processing: 30 days maximum
- Fees: Completely FREE
- Appeal: 30 days if not satisfied

CONTACT INFORMATION:
- Website: pgportal.gov.in
- Helpline: 1100
- Email: grievances@gov.in"#;

pub const HEALTH_SCHEMES: &str = r#"Major Government Health Schemes:

SUMMARY: Healthcare coverage through government schemes for different categories of citizens.

MAJOR SCHEMES:
1. Ayushman Bharat PM-JAY: ₹5 lakh coverage for poor families
2. CGHS: Central Government Health Scheme for employees
3. ESIC: Employees' State Insurance for organised sector workers
4. PMSBY: Pradhan Mantri Suraksha Bima Yojana - ₹2 lakh accident insurance
5. State Health Schemes: Various state-specific programmes

STEP-BY-STEP PROCEDURE:
1. Identify the applicable scheme based on eligibility
2. Visit the nearest enrolment centre
3. Submit required documents
4. Complete the registration process
5. Receive the health card/policy document
6. Use benefits at empanelled hospitals

REQUIRED DOCUMENTS:
- Aadhaar Card: Mandatory for most schemes
- Income Certificate: For means-tested schemes
- Bank Account: For premium payments
- Employment Proof: For employment-based schemes

PROCESSING TIME & FEES:
- Processing: 7-30 days
- Fees: Varies by scheme (many are free)
- Premium: ₹12-₹330 per year for insurance schemes

CONTACT INFORMATION:
- Ayushman Bharat: 14555
- CGHS: cghs.gov.in
- ESIC: esic.nic.in"#;

pub const RATION_CARD: &str = r#"Ration Card Application Process:

SUMMARY: A ration card provides access to subsidised food grains through the Public Distribution System (PDS).

STEP-BY-STEP PROCEDURE:
1. Visit the local Food & Civil Supplies office
2. Collect the application form or download it online
3. Fill the form with family details
4. Attach required documents
5. Submit the application with photographs
6. Pay the prescribed fee
7. Collect the acknowledgement receipt
8. Verification by an inspector
9. Receive the ration card within 30 days

REQUIRED DOCUMENTS:
- Address proof (Aadhaar, utility bills, rent agreement)
- Identity proof (Aadhaar, voter ID, passport)
- Income certificate
- Family photograph
- Bank account details

PROCESSING TIME & FEES:
- Processing: 15-30 days
- Fees: ₹15-30 (varies by state)
- APL/BPL classification based on income

CONTACT INFORMATION:
- Local Food & Civil Supplies Department
- State government websites
- Helpline: 1967 (varies by state)"#;

pub const PENSION: &str = r#"Pension Schemes for Citizens:

SUMMARY: Pension schemes are available for different categories of citizens including the elderly, widows, and disabled persons.

MAJOR SCHEMES:
1. Old Age Pension: For senior citizens (60+)
2. Widow Pension: For widows below the poverty line
3. Disability Pension: For disabled persons
4. National Pension System (NPS): For all citizens

STEP-BY-STEP PROCEDURE:
1. Visit the local tehsil/block office
2. Fill the application form
3. Submit required documents
4. Income and age verification
5. Medical examination (if required)
6. Approval by the competent authority
7. Receive the pension in your bank account

REQUIRED DOCUMENTS:
- Age proof (birth certificate, school certificate)
- Income certificate
- Aadhaar card
- Bank account details
- Photographs
- Medical certificate (for disability pension)

PROCESSING TIME & FEES:
- Processing: 30-60 days
- Fees: Usually FREE
- Pension amount: ₹200-1000 per month (varies by state)

CONTACT INFORMATION:
- Local Tehsil/Block office
- District Collector office
- State social welfare department"#;

pub const DRIVING_LICENSE: &str = r#"Driving License Application Process:

SUMMARY: A Driving License (DL) is mandatory for driving any motor vehicle on Indian roads and is issued by the Regional Transport Office (RTO).

STEP-BY-STEP PROCEDURE:
1. Apply online at parivahan.gov.in or visit the RTO
2. Fill Form 1 (application for learner's license)
3. Submit documents and pay fees
4. Pass the written test to get a learner's license
5. Practise driving for a minimum of 30 days
6. Apply for the permanent license (Form 2)
7. Pass the practical driving test
8. Receive the permanent driving license

REQUIRED DOCUMENTS:
- Form 1 and Form 2
- Age proof (birth certificate, 10th marksheet)
- Address proof (Aadhaar, voter ID, passport)
- Medical certificate (for commercial vehicles)
- Passport-size photographs (4 copies)
- Learner's license (for permanent DL)

PROCESSING TIME & FEES:
- Learner's License: ₹150, same day issuance
- Permanent License: ₹200, 7-15 days
- Smart Card: ₹200 additional
- Validity: 20 years (till age 50), 10 years thereafter

CONTACT INFORMATION:
- Website: parivahan.gov.in
- Local RTO office
- Helpline: Varies by state"#;

pub const INCOME_TAX: &str = r#"Income Tax Return (ITR) Filing:

SUMMARY: The annual declaration of income and tax computation filed with the Income Tax Department by eligible taxpayers.

STEP-BY-STEP PROCEDURE:
1. Gather all tax documents
2. Choose the correct ITR form (ITR-1 to ITR-7)
3. Log in to the e-filing portal
4. Fill the ITR form online
5. Verify the tax computation
6. Submit the return electronically
7. Verify using Aadhaar OTP/EVC/DSC
8. Download the acknowledgement

REQUIRED DOCUMENTS:
- PAN card
- Aadhaar card
- Form 16/16A (TDS certificates)
- Bank statements
- Investment proofs (80C, 80D, etc.)
- Capital gains statements
- Business income details (if applicable)

PROCESSING TIME & FEES:
- Filing: Free on the income tax portal
- Due dates: July 31 (individuals), September 30 (audited)
- Refund processing: 30-45 days
- Late filing penalty: ₹5,000-10,000

CONTACT INFORMATION:
- Website: incometax.gov.in
- Helpline: 1800-103-0025
- Email: ito.admin@incometax.gov.in"#;

pub const PASSPORT: &str = r#"Passport Application Process:

SUMMARY: A passport is the official travel document issued by the Government of India for international travel.

STEP-BY-STEP PROCEDURE:
1. Register on passportindia.gov.in
2. Fill the online application form
3. Pay the fee online
4. Book an appointment at a PSK/POPSK
5. Visit the centre with original documents
6. Document verification and biometric capture
7. Police verification (if required)
8. Passport printing and dispatch

REQUIRED DOCUMENTS:
- Online application form
- Birth certificate
- Address proof (Aadhaar, voter ID, utility bills)
- Identity proof (Aadhaar, PAN, voter ID)
- Photographs (2 recent passport-size)
- Annexure H (if applicable)

PROCESSING TIME & FEES:
- Normal: 30-45 days
  - 36 pages: ₹1,500
  - 60 pages: ₹2,000
- Tatkal: 3-7 days
  - Additional ₹2,000 over normal fees

CONTACT INFORMATION:
- Website: passportindia.gov.in
- Helpline: 1800-258-1800
- Email: support@passportindia.gov.in"#;

pub const BIRTH_DEATH_CERTIFICATE: &str = r#"Birth/Death Certificate Process:

SUMMARY: Legal documents proving a birth or death, mandatory for many government services and legal purposes.

STEP-BY-STEP PROCEDURE:
1. Visit the Registrar office or apply online
2. Fill the registration form
3. Submit required documents
4. Pay the prescribed fee
5. Collect the receipt/acknowledgement
6. Receive the certificate after verification

REQUIRED DOCUMENTS:
For Birth Certificate:
- Hospital discharge summary
- Parents' identity and address proofs
- Marriage certificate of parents

For Death Certificate:
- Medical certificate/Post-mortem report
- Identity proof of the deceased
- Affidavit by a relative

PROCESSING TIME & FEES:
- Registration: Within 21 days (birth), 24 hours (death)
- Late registration: Additional fees apply
- Certificate fees: ₹10-50
- Processing: Same day to 7 days

CONTACT INFORMATION:
- Local Registrar office
- Online: crsorgi.gov.in
- Municipal corporation offices"#;

pub const DEFAULT_HELP: &str = r#"Welcome to Citizen Services Assistant

SUMMARY: I can help you with information about government services and procedures. Ask about a specific service to get its full procedure.

POPULAR SERVICES:
• Aadhaar Card (enrolment, updates, corrections)
• PAN Card (new application, corrections, duplicate)
• Voter ID (registration, address change, corrections)
• Driving License (learner's, permanent, renewal)
• Passport (new, renewal, tatkal services)
• Ration Card (new application, additions, corrections)
• Income Tax (ITR filing, TDS, refunds)
• Pension Schemes (old age, widow, disability)
• Birth/Death Certificates
• Ayushman Bharat and other Government Health Schemes
• Grievance Redressal System

STEP-BY-STEP PROCEDURE:
1. Ask a specific question about any government service
2. Receive the step-by-step procedure for that service
3. Check the required documents and eligibility criteria
4. Note the processing time, fees and contact information

REQUIRED DOCUMENTS:
- Depend on the service; ask about a specific service to see its list

PROCESSING TIME & FEES:
- Depend on the service; each service answer lists its timelines and fees

CONTACT INFORMATION:
- For urgent matters, contact the relevant department directly
- Examples: "How to apply for PAN card?", "Documents needed for Ayushman Bharat?", "Voter ID address change process", "File grievance against government department""#;

pub const QUICK_HELP: &str = r#"Quick Help - Popular Services:

🔸 "How to apply for Aadhaar card?"
🔸 "PAN card application process"
🔸 "Voter ID registration steps"
🔸 "Ayushman Bharat eligibility"
🔸 "Driving license requirements"
🔸 "File income tax return"
🔸 "Grievance redressal process"

Tips for Better Responses:
• Be specific about the service you need
• Mention if you need documents, fees, or timelines
• Ask about eligibility criteria if unsure
• Request step-by-step procedures for complex processes

Emergency Contacts:
• Police: 100 • Fire: 101 • Ambulance: 108"#;

/// Every built-in (key, answer) pair, default help included.
pub fn entries() -> [(&'static str, &'static str); 13] {
    [
        ("aadhaar", AADHAAR),
        ("pan_card", PAN_CARD),
        ("voter_id", VOTER_ID),
        ("ayushman_bharat", AYUSHMAN_BHARAT),
        ("grievance_redressal", GRIEVANCE_REDRESSAL),
        ("health_schemes", HEALTH_SCHEMES),
        ("ration_card", RATION_CARD),
        ("pension", PENSION),
        ("driving_license", DRIVING_LICENSE),
        ("income_tax", INCOME_TAX),
        ("passport", PASSPORT),
        ("birth_death_certificate", BIRTH_DEATH_CERTIFICATE),
        (crate::constants::DEFAULT_TOPIC, DEFAULT_HELP),
    ]
}

/// Service categories shown by the UI, in display order.
pub fn service_categories() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "Identity Documents",
            vec!["Aadhaar Card", "PAN Card", "Voter ID", "Passport", "Driving License"],
        ),
        (
            "Certificates",
            vec![
                "Birth Certificate",
                "Death Certificate",
                "Income Certificate",
                "Caste Certificate",
            ],
        ),
        (
            "Social Welfare",
            vec![
                "Ration Card",
                "Pension Schemes",
                "Scholarship",
                "Disability Certificate",
            ],
        ),
        (
            "Health Services",
            vec!["Ayushman Bharat", "Health Insurance", "Medical Certificate"],
        ),
        (
            "Tax Services",
            vec!["Income Tax Filing", "GST Registration", "TDS Services"],
        ),
        (
            "Grievance & Support",
            vec!["Public Grievance", "RTI Application", "Consumer Complaints"],
        ),
    ]
}
