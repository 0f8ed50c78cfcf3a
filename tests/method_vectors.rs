//! Published sample accounts for the check digit methods

use bank_account_check::{validate, validate_with_bank_code, Method, MethodEngine};
use strum::IntoEnumIterator;

/// Method, accounts with a matching check digit, accounts without
type Vectors = (&'static str, &'static [&'static str], &'static [&'static str]);

#[rustfmt::skip]
const VECTORS: &[Vectors] = &[
    ("00", &["9290701", "539290858", "1501824", "1501832"], &["9290702", "539290859", "1501825"]),
    ("01", &["25933372", "9438257323", "5284960985"], &["25933373", "9438257324"]),
    ("02", &["684168812", "2471104414", "60551151"], &["684168813", "2471104415"]),
    ("03", &["58765119", "6869608704", "3227304"], &["58765110", "6869608705"]),
    ("04", &["12607512", "487941182", "2759288338"], &["12607513", "487941183"]),
    ("05", &["285501612", "1448279450", "2070468858"], &["285501613", "1448279451"]),
    ("06", &["27402437", "73247390", "4099618529"], &["27402438", "73247391"]),
    ("07", &["1091700", "4524599339", "71633863"], &["1091701", "4524599330"]),
    ("08", &["3993904", "7373934855", "1889486922"], &["3993905", "7373934856"]),
    ("10", &["12345008", "87654008"], &["12345009", "87654009"]),
    ("11", &["343059037", "5302503921", "4798926329"], &["343059038", "5302503922"]),
    ("13", &["60624", "604"], &["60625", "605"]),
    ("14", &["9411615", "3203279529", "3176266"], &["9411616", "3203279520"]),
    ("15", &["794233138", "730324430", "3970336846"], &["794233139", "730324431"]),
    ("16", &["9021736", "5001015166", "6590211476"], &["9021737", "5001015167"]),
    ("17", &["0446786040"], &["0446786041", "0446787040"]),
    ("18", &["6672262337", "4245217672", "668586478"], &["6672262338", "4245217673"]),
    ("19", &["93996217", "9405259", "6247622197"], &["93996218", "9405250"]),
    ("20", &["965476456", "4150384", "1500051655"], &["965476457", "4150385"]),
    ("21", &["1656463051", "288604140", "607846133"], &["1656463052", "288604141"]),
    ("22", &["2526300", "763794772", "271701101"], &["2526301", "763794773"]),
    ("23", &["75248109", "90311959", "25542640"], &["85248109", "10311959"]),
    ("24", &["138301", "1306118605", "3307118608", "9307118603"], &["138302", "1306118606", "3307118609"]),
    ("25", &["73813788", "5774891203", "484052047"], &["73813789", "5774891204"]),
    ("26", &["0520309001", "1111118111", "0005501024"], &["0005501025", "0520309101"]),
    ("27", &["6432105605", "2705827991", "15836492"], &["6432105606", "2705827992"]),
    ("28", &["19999000", "9130000201"], &["19999100", "9130000301"]),
    ("29", &["3145863029"], &["3145863020", "3145863039"]),
    ("30", &["6685024633", "571041358", "7437420932"], &["6685024634", "571041359"]),
    ("31", &["1000000524", "1000000583"], &["1000000525", "1000000584"]),
    ("32", &["6483181219", "4278810", "287291760"], &["6483181210", "4278811"]),
    ("33", &["6101863190", "19105058", "3367761"], &["6101863191", "19105059"]),
    ("34", &["1207990", "30500748", "2967135"], &["2207990", "40500748"]),
    ("35", &["0000108443", "0000107451", "0000102921", "0000102349", "0000101709", "0000101599"], &["0000108444", "0000107452", "0000102922"]),
    ("36", &["2408736142", "2018867643", "7314608467"], &["2408736143", "2018867644"]),
    ("37", &["82894163", "90861548", "4944764043"], &["82894164", "90861549"]),
    ("38", &["14166278", "655525754", "9530884096"], &["14166279", "655525755"]),
    ("39", &["27689979", "5020404926", "9787862198"], &["27689970", "5020404927"]),
    ("40", &["1210430", "423916248", "77599015"], &["1210431", "423916249"]),
    ("41", &["20364394", "1219183625", "6466859292"], &["20364395", "1219183626"]),
    ("42", &["59498", "59510"], &["59499", "59511"]),
    ("43", &["15576155", "552630912", "578444765"], &["15576156", "552630913"]),
    ("44", &["2516664", "7155784810", "1669753037"], &["2516665", "7155784811"]),
    ("45", &["3545343232", "4013410024", "0994681254", "0000012340", "1000199999", "0100114240"], &["3545343233", "4013410025"]),
    ("46", &["76231846", "9281954", "67999251"], &["86231846", "1281954"]),
    ("47", &["6047367592", "2380237", "26749236"], &["6047367502", "2380247"]),
    ("48", &["5192525842", "5829818154", "55737348"], &["5192525852", "5829818164"]),
    ("49", &["9290701", "1234569"], &["1234560"]),
    ("50", &["7144113385", "9744320554", "97511159"], &["8144113385", "1744320554"]),
    ("51", &["0001156071", "0001156136", "0000156078", "0000156071", "0099100002"], &["0001156072", "0001156137", "0000156079"]),
    ("52", &["9856572026", "9323414040"], &["9856572027", "9323414041"]),
    ("53", &["9258767028", "9477694891"], &["9258767029", "9477694892"]),
    ("54", &["3040572678", "8623446456", "9977953"], &["3040572679", "8623446457"]),
    ("55", &["2641781810", "2184418574", "4397101143"], &["2641781811", "2184418575"]),
    ("56", &["0290545005", "9718304037"], &["0290545006", "9718304038"]),
    ("57", &["7500021766", "9400001734", "7800028282", "8100244186", "3251080371", "3891234567", "7777778800", "5001050352", "5045090090", "1909700805", "9322111030", "5000065514"], &["7500021767", "9400001735", "7800028283"]),
    ("58", &["1277400033", "7593982", "5260271888"], &["1277400034", "7593983"]),
    ("59", &["3251331058", "9060922763", "6373285045"], &["3251331059", "9060922764"]),
    ("60", &["5440716641", "4149961", "7202120575"], &["5440716642", "4149962"]),
    ("61", &["2063099200", "0260760481"], &["0260760482", "2063099300"]),
    ("62", &["5029076701"], &["5029076801"]),
    ("63", &["123456600", "1234566"], &["1234567", "123456700"]),
    ("64", &["1206473010", "5016511020"], &["1206474010", "5016512020"]),
    ("65", &["1234567400", "1234567590"], &["1234567591", "1234567500"]),
    ("66", &["100154508", "101154508", "100154516", "101154516"], &["100154509", "101154509", "100154517"]),
    ("67", &["4162751427", "48605035", "1926328431"], &["5162751427", "58605035"]),
    ("68", &["8889654328", "987654324", "987654328", "400000000", "499999999"], &["8889654329", "987654325", "987654329"]),
    ("69", &["9721134869"], &["9721134860", "9721134879"]),
    ("70", &["5898894620", "9115323", "29706208"], &["5898894621", "9115324"]),
    ("71", &["7101234007"], &["7101234008", "7101235007"]),
    ("72", &["3902754547", "794191599", "8480915"], &["3902754548", "794191590"]),
    ("73", &["0003503398", "0001340967"], &["0003503399", "0003503308"]),
    ("74", &["1016", "26260", "242243", "242248", "18002113", "1821200043"], &["1017", "26261", "242244"]),
    ("75", &["2871459", "49915520", "2694201095"], &["2871450", "49915521"]),
    ("76", &["0006543200", "9012345600", "7876543100"], &["0006543300", "9012345700"]),
    ("77", &["10338", "13844", "65354", "69258"], &["10339", "13845", "65355"]),
    ("78", &["7581499", "9999999981"], &["7581490", "9999999982"]),
    ("79", &["4934407810", "4934178726", "6812227707"], &["4934407811", "4934178727"]),
    ("80", &["340968", "340966"], &["340969", "340967"]),
    ("81", &["0646440", "1359100"], &["0646441", "1359101"]),
    ("82", &["123897", "3199500501"], &["123898", "3199500502"]),
    ("83", &["0001156071", "0001156136", "0000156078", "0000156071", "0099100002"], &["0001156072", "0001156137", "0000156079"]),
    ("84", &["616970592", "9175811", "4915230"], &["616970593", "9175812"]),
    ("85", &["2382580", "6091872850", "4632490687"], &["2382583", "6091872852"]),
    ("86", &["340968", "1001171", "1009588", "123897", "340960"], &["340969", "1001172", "1009589"]),
    ("87", &["0000000406", "0000051768", "0010701590", "0010720185"], &["0000000407", "0000051769", "0010701591"]),
    ("88", &["2525259", "1000500", "90013000", "92525253", "99913003"], &["2525250", "1000501", "90013001"]),
    ("89", &["4810063", "28734661", "8894110"], &["4810064", "28734662"]),
    ("90", &["0001975641", "0001988654", "0000654321", "0000824491", "0004923250", "0099100002"], &["0001975642", "0001988655", "0000654322"]),
    ("91", &["2974118000", "5281741000", "9952810000", "2974117000", "5281770000", "9952812000", "8840019000", "8840050000", "8840087000", "8840045000", "8840012000", "8840055000", "8840080000"], &["8840019001", "8840050001", "8840087001"]),
    ("92", &["8650680839", "5050226688", "6375018200"], &["8650680830", "5050226689"]),
    ("93", &["463629265", "5177004516", "6834304761"], &["463629266", "6177004516"]),
    ("94", &["2995363448", "4406379", "5925029"], &["2995363449", "4406370"]),
    ("95", &["0068007003", "0847321750", "6450060494", "6454000003"], &["0068007004", "0847321751", "6450060495"]),
    ("96", &["0000254100", "9421000009", "0000000208", "0101115152", "0301204301"], &["0000254101", "9421000000", "0000000209"]),
    ("97", &["24010019"], &["24010010", "24010029"]),
    ("98", &["9619439213", "3009800016", "9619509976", "5989800173", "9619319999", "6719430018"], &["9619439214", "3009800017", "9619509977"]),
    ("99", &["0068007003", "0847321750"], &["0068007004", "0847321751"]),
    ("A0", &["31994244", "23601308", "8447601930"], &["31994245", "23601309"]),
    ("A1", &["0010030005", "0010030997", "1010030054"], &["0010030006", "0010030998", "1010030055"]),
    ("A2", &["3456789019", "5678901231", "6789012348", "3456789012"], &["3456789010", "5678901232", "6789012349"]),
    ("A3", &["1234567897", "0123456782", "9876543210", "1234567890"], &["1234567898", "0123456783", "9876543211"]),
    ("A4", &["0004711173", "0007093330", "0004711172", "0007093335", "1199503010", "8499421235"], &["0004711174", "0007093331", "0007093336"]),
    ("A5", &["9941510001", "9961230019", "9380027210", "9932290910", "0000251437", "0007948344"], &["9941510002", "9961230010", "9380027211"]),
    ("A6", &["33850234", "92451557", "76289965"], &["33850235", "92451558"]),
    ("A7", &["19010008", "19010438", "19010660", "19010876", "209010892"], &["19010009", "19010439", "19010661"]),
    ("A8", &["7436661", "7436670", "1359100", "7436660", "7436678", "0003503398", "0001340967"], &["7436662", "7436671", "1359101"]),
    ("A9", &["5043608", "86725", "504360", "822035", "32577083"], &["5043609", "86726", "504361"]),
    ("B0", &["1197423162", "1000000606"], &["1000000706"]),
    ("B1", &["1434253150", "2746315471", "7414398260", "8347251693"], &["1434253151", "2746315472", "7414398261"]),
    ("B2", &["0020012357", "0080012345", "0926801910", "1002345674", "8000990054", "9000481805"], &["0020012358", "0080012346", "0926801911"]),
    ("B3", &["1000000060", "9635000101", "9730200100"], &["1000000061", "9635000102", "9730200101"]),
    ("B4", &["9941510001", "9961230019", "9380027210", "9932290910", "0000251437", "0007948344", "0000051640"], &["9941510002", "9961230010", "9380027211"]),
    ("B5", &["0159006955", "2000123451", "1151043216", "9000939033", "0123456782", "0130098767", "1045000252"], &["2000123452", "1151043217", "9000939034"]),
    ("B6", &["9110000000", "0269876545"], &["9110000001", "0269876546"]),
    ("B7", &["0700001529", "0730000019", "0001001008"], &["0700001520", "0730000010", "0001001009"]),
    ("B8", &["0734192657", "6932875274", "3145863029", "2938692523"], &["0734192658", "6932875275", "3145863020"]),
    ("B9", &["87920187", "41203755", "81069577", "61287958", "58467232", "7125633", "1253657", "4353631"], &["87920188", "41203756", "58467233"]),
    ("C0", &["15189368", "23514434", "864623178"], &["15189369", "23514435"]),
    ("C1", &["0446786040", "0478046940", "5432112349", "5543223456"], &["5432112340", "5543223457"]),
    ("C2", &["2394871426", "4218461950", "7352569148", "5127485166", "8738142564"], &["2394871427", "4218461951", "7352569149"]),
    ("C3", &["9294182", "4431276", "19919", "9000420530", "9000010006"], &["9294183", "4431277", "19910"]),
    ("C4", &["0000000019", "0000292932", "0000094455", "9000420530", "9000010006"], &["0000000010", "0000292933", "0000094456"]),
    ("C5", &["0000301168", "0000302554", "0300020050", "0300566000", "1000061378", "1000061412"], &["0000301169", "0000302555", "1000061379"]),
    ("C6", &["0000065516", "0203178249", "1031405209", "1082012201", "2003455189", "2004001016", "3110150986", "3068459207", "5035105948", "5286102149", "4012660028"], &["0000065517", "0203178240", "1031405200"]),
    ("C7", &["3500022", "38150900", "600103660", "39101181", "94012341", "5073321010"], &["3500023", "94012342", "5073321011"]),
    ("C8", &["3456789019", "5678901231", "3456789012", "0022007130", "0123456789", "0552071285"], &["3456789010", "5678901232", "3456789013"]),
    ("C9", &["3456789019", "5678901231", "0123456789"], &["3456789010", "5678901232", "0123456780"]),
    ("D0", &["6100272324", "6100273479", "5700000000"], &["6100272325", "6100273470"]),
    ("D1", &["0082012203", "1452683581", "2129642505", "3002000027", "4230001407", "5000065514", "6001526215", "7126502149", "9000430223"], &["0082012204", "1452683582", "2129642506"]),
    ("D2", &["189912137", "235308215", "4455667784", "1234567897", "51181008", "71214205"], &["235308216", "1234567898", "51181009"]),
    ("D3", &["1600169591", "1600189151", "1800084079", "6019937007", "6021354007", "6030642006"], &["1600169592", "1600189152", "1800084070"]),
    ("D4", &["1112048219", "2024601814", "3000005012"], &["1112048210", "2024601815", "3000005013"]),
    ("D5", &["5999718138", "1799222116", "0099632004"], &["5999718139", "1799222117", "0099632005"]),
    ("D6", &["3409", "585327", "1650513", "3601671056", "4402001046", "6100268241", "7004000001"], &["585328", "3601671057", "4402001047"]),
    ("D7", &["0500018205", "0230103715", "0301000434", "0330035104", "0420001202", "0134637709", "0201005939", "0602006999"], &["0500018206", "0230103716", "0301000435"]),
    ("D8", &["1403414848", "6800000439", "6899999954", "0010000000", "0099999999"], &["1403414849", "6800000430", "6899999955"]),
    ("D9", &["1234567897", "0123456782", "9876543210", "1234567890", "1100132044", "1100669030"], &["1234567898", "0123456783", "1234567891"]),
    ("E0", &["1234568013", "1534568010", "2610015", "8741013011"], &["1234568014", "1534568011", "2610016"]),
    ("E1", &["0134211909", "0100041104", "0100054106", "0200025107"], &["0134211900", "0100041105", "0100054107"]),
];

#[test]
fn test_sample_accounts() {
    let engine = MethodEngine::default();
    for (method, valid, invalid) in VECTORS {
        for account in *valid {
            assert!(engine.validate(account, method), "{account} should pass method {method}");
        }
        for account in *invalid {
            assert!(!engine.validate(account, method), "{account} should fail method {method}");
        }
    }
}

#[test]
fn test_sort_code_methods() {
    assert!(validate_with_bank_code("43001500", "52", "13051172"));
    assert!(validate_with_bank_code("48726458", "52", "13051172"));
    assert!(validate_with_bank_code("48726458", "53", "13051172"));
    assert!(validate_with_bank_code("382432200", "53", "16052072"));
    assert!(validate_with_bank_code("43001500", "C0", "13051172"));
    assert!(validate_with_bank_code("487310018", "B6", "80053782"));
}

#[test]
fn test_sort_code_methods_flip_on_changes() {
    // a changed account digit
    assert!(!validate_with_bank_code("43001501", "52", "13051172"));
    assert!(!validate_with_bank_code("43101500", "52", "13051172"));
    assert!(!validate_with_bank_code("383432200", "53", "16052072"));
    // a changed sort code
    assert!(!validate_with_bank_code("43001500", "52", "13051173"));
    assert!(!validate_with_bank_code("382432200", "53", "16052073"));
    assert!(!validate_with_bank_code("487310019", "B6", "80053782"));
}

#[test]
fn test_sort_code_methods_without_sort_code() {
    assert!(!validate("43001500", "52"));
    assert!(!validate("382432200", "53"));
    assert!(!validate("487310018", "B6"));
    assert!(!validate("43001500", "C0"));
    // paths that do not use the sort code still validate
    assert!(validate("0082335729", "C0"));
    assert!(validate("0734192657", "C0"));
    assert!(validate("9110000000", "B6"));
}

#[test]
fn test_method49_tries_00_then_01() {
    assert!(validate("9290701", "49"));
    assert!(validate("1234569", "49"));
    assert!(!validate("1234560", "49"));
}

#[test]
fn test_every_method_is_total_and_deterministic() {
    let accounts = [
        "0",
        "1",
        "9",
        "42",
        "100000",
        "1234567",
        "12345678",
        "123456789",
        "1234567890",
        "0000000001",
        "5000000000",
        "9999999999",
    ];
    let engine = MethodEngine::default();

    for method in Method::iter() {
        for account in accounts {
            let first = engine.validate_with_bank_code(account, method.code(), "13051172");
            let second = engine.validate_with_bank_code(account, method.code(), "13051172");
            assert_eq!(first, second, "{account} with method {method}");
            let _ = engine.validate(account, method.code());
        }
    }
}

#[test]
fn test_zero_account() {
    assert!(!validate("0", "24"));
    assert!(!validate("0000000000", "87"));
    assert!(validate("0", "09"));
}

#[test]
fn test_leading_zero_forms_agree() {
    for method in ["00", "06", "17", "51", "A4"] {
        assert_eq!(
            validate("9290701", method),
            validate("0009290701", method),
            "method {method}"
        );
    }
}

#[test]
fn test_every_checked_method_has_vectors() {
    for method in Method::iter() {
        let listed = VECTORS.iter().any(|(code, _, _)| *code == method.code());
        match method {
            Method::M09 | Method::M12 => assert!(!listed, "method {method} needs no vectors"),
            _ => assert!(listed, "method {method} has no vectors"),
        }
    }
}

#[test]
fn test_method01_hand_computed() {
    // 0 0 2 5 9 3 3 3 7 weighted 3 7 1 from the right: 21 + 21 + 3 + 9 + 63 + 5 + 6 = 128
    // remainder 8, check digit 10 - 8 = 2
    assert!(validate("25933372", "01"));
    for check in (0..=9).filter(|&digit| digit != 2) {
        assert!(!validate(&format!("2593337{check}"), "01"), "check digit {check}");
    }
}

#[test]
fn test_method08_literal_threshold() {
    // the 60000 threshold is ambiguous in the method text and kept literally
    assert!(validate("26146", "00"));
    assert!(!validate("26146", "08"));
    assert!(validate("10330", "00"));
    assert!(!validate("10330", "08"));
    assert!(validate("62117", "08"));
    assert!(validate("66571", "08"));
}

#[test]
fn test_method11_remainder_one_maps_to_zero() {
    assert!(validate("4982597910", "11"));
    assert!(!validate("4982597919", "11"));
}

#[test]
fn test_methods16_and_23_compare_digits_without_checksum() {
    assert!(validate("5101980588", "16"));
    assert!(validate("1003313888", "16"));
    assert!(!validate("8709683794", "16"));
    assert!(!validate("9236941136", "16"));

    assert!(validate("4088933166", "23"));
    assert!(validate("4952122255", "23"));
    assert!(!validate("9578203082", "23"));
    assert!(!validate("1359109893", "23"));
}

#[test]
fn test_method25_without_checksum_accepts_types_8_and_9() {
    assert!(validate("990150957", "25"));
    assert!(validate("292357290", "25"));
    assert!(!validate("912533174", "25"));
    assert!(!validate("246053641", "25"));
}

#[test]
fn test_method27_threshold() {
    // below one million the cross sum rule decides
    assert!(validate("774216", "27"));
    assert!(validate("748186", "27"));
    // above it only the transposition table counts
    assert!(validate("9060261028", "27"));
    assert!(validate("4217009466", "27"));
    assert!(!validate("145308078", "27"));
}

#[test]
fn test_method41_ignores_prefix_before_nine() {
    for account in ["9289973306", "8619178179"] {
        assert!(validate(account, "41"), "{account}");
        assert!(!validate(account, "00"), "{account}");
    }
}

#[test]
fn test_method59_short_accounts_pass() {
    assert!(validate("123", "59"));
    assert!(validate("999999999", "59"));
    assert!(validate("3251331058", "59"));
    assert!(!validate("3251331059", "59"));
}

#[test]
fn test_method70_narrowed_slice() {
    assert!(validate("7505790778", "70"));
    assert!(validate("7065415942", "70"));
    assert!(validate("2666960367", "70"));
}

#[test]
fn test_method75_reslices_nine_digit_accounts() {
    // second digit 9 moves the slice one position right
    assert!(validate("967459818", "75"));
    assert!(validate("994735824", "75"));
    assert!(validate("544577753", "75"));
    assert!(validate("217042505", "75"));
    assert!(validate("6750125", "75"));
    assert!(validate("492488", "75"));
}

#[test]
fn test_method79_variants() {
    assert!(validate("9169972168", "79"));
    assert!(validate("2860599109", "79"));
    assert!(validate("8589137671", "79"));
    assert!(validate("5642684582", "79"));
    // accounts shorter than ten digits start with zero
    assert!(!validate("123456789", "79"));
}

#[test]
fn test_methods84_and_85_special_positions() {
    assert!(validate("2793180947", "84"));
    assert!(validate("5792587680", "84"));

    assert!(validate("5499915120", "85"));
    assert!(validate("5799538482", "85"));
    assert!(!validate("3899636681", "85"));
}

#[test]
fn test_method89_routes_by_length() {
    assert!(validate("3787385", "89"));
    assert!(validate("7120010", "89"));
    assert!(!validate("3787386", "89"));

    for account in ["76794563", "17814189"] {
        assert!(validate(account, "89"), "{account}");
        assert!(validate(account, "10"), "{account}");
    }
    assert!(!validate("880067725", "89"));
    assert!(!validate("68141536", "89"));

    assert!(validate("123456", "89"));
    assert!(validate("1234567890", "89"));
}

#[test]
fn test_method93_published_accounts() {
    for account in [
        "6714790000",
        "0000671479",
        "1277830000",
        "0000127783",
        "1277910000",
        "0000127791",
        "3067540000",
        "0000306754",
    ] {
        assert!(validate(account, "93"), "{account}");
    }
}

#[test]
fn test_methoda0_three_digit_accounts_pass() {
    for account in ["100", "101", "999"] {
        assert!(validate(account, "A0"), "{account}");
    }
    assert!(!validate("1000", "A0"));
}

#[test]
fn test_methoda6_second_digit_selects_method() {
    for account in ["6886912242", "3830524686"] {
        assert!(validate(account, "A6"), "{account}");
        assert!(validate(account, "00"), "{account}");
    }
    for account in ["4288650649", "7767341225"] {
        assert!(validate(account, "A6"), "{account}");
        assert!(validate(account, "01"), "{account}");
    }
}
