use reckon::{AngleMode, CalcError, ErrorKind, EvaluationOutcome, evaluate, format, try_evaluate};

fn assert_result(src: &str, expected: &str) {
    assert_result_with(src, AngleMode::Deg, 0.0, expected);
}

fn assert_result_with(src: &str, angle_mode: AngleMode, ans: f64, expected: &str) {
    match evaluate(src, angle_mode, ans) {
        EvaluationOutcome::Success { formatted, .. } => {
            assert_eq!(formatted, expected, "`{src}` formatted wrongly");
        },
        EvaluationOutcome::Error(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    assert_kind_with(src, AngleMode::Deg, kind);
}

fn assert_kind_with(src: &str, angle_mode: AngleMode, kind: ErrorKind) {
    match evaluate(src, angle_mode, 0.0) {
        EvaluationOutcome::Success { formatted, .. } => {
            panic!("`{src}` succeeded with {formatted} but was expected to fail")
        },
        EvaluationOutcome::Error(e) => assert_eq!(e.kind(), kind, "`{src}` failed with {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_result("1+2*3", "7");
    assert_result("(1+2)*3", "9");
    assert_result("10-4-3", "3");
    assert_result("100/10/5", "2");
    assert_result("2×3÷4", "1.5");
    assert_result("  1 +  2 ", "3");
    assert_result("((2))", "2");
}

#[test]
fn power_is_right_associative() {
    assert_result("2^3^2", "512");
    assert_result("(2^3)^2", "64");
}

#[test]
fn unary_minus() {
    assert_result("-3^2", "-9");
    assert_result("(-3)^2", "9");
    assert_result("-(2+3)", "-5");
    assert_result("--3", "3");
    assert_result("4*-2", "-8");
    assert_result("2*-3", "-6");
    assert_result("2^(-3)", "0.125");
    assert_kind("2^-3", ErrorKind::Syntax);
    assert_kind("2^--3", ErrorKind::Syntax);
    assert_result("-3!", "-6");
}

#[test]
fn factorial() {
    assert_result("5!", "120");
    assert_result("0!", "1");
    assert_result("3!!", "720");
    assert_result("2^3!", "64");
    assert_result("10!", "3628800");
    assert_kind("3.2!", ErrorKind::Math);
    assert_kind("(-1)!", ErrorKind::Math);
    assert_kind("171!", ErrorKind::Math);
    assert_kind("sin(30)!", ErrorKind::Math);
    assert!(evaluate("170!", AngleMode::Deg, 0.0).is_success());
}

#[test]
fn trigonometry_in_degrees() {
    assert_result("sin(30)", "0.5");
    assert_result("cos(60)", "0.5");
    assert_result("tan(45)", "1");
    assert_result("sin(180)", "0");
    assert_result("asin(0.5)", "30");
    assert_result("acos(-1)", "180");
    assert_result("atan(1)", "45");
    assert_kind("tan(90)", ErrorKind::Math);
    assert_kind("tan(-270)", ErrorKind::Math);
}

#[test]
fn trigonometry_in_radians() {
    assert_result_with("sin(pi/2)", AngleMode::Rad, 0.0, "1");
    assert_result_with("cos(π)", AngleMode::Rad, 0.0, "-1");
    assert_result_with("acos(-1)", AngleMode::Rad, 0.0, "3.14159265359");
    assert_result_with("sin(30)", AngleMode::Rad, 0.0, "-0.988031624093");
    assert_kind_with("tan(pi/2)", AngleMode::Rad, ErrorKind::Math);
}

#[test]
fn logarithms_roots_and_the_rest() {
    assert_result("log(100)", "2");
    assert_result("log(8,2)", "3");
    assert_result("ln(e)", "1");
    assert_result("exp(1)", "2.71828182846");
    assert_result("sqrt(16)", "4");
    assert_result("sqrt(2)", "1.41421356237");
    assert_result("abs(-3.5)", "3.5");
    assert_result("LOG(1000)", "3");
}

#[test]
fn constants() {
    assert_result("pi", "3.14159265359");
    assert_result("e", "2.71828182846");
    assert_result("π+e", "5.85987448205");
}

#[test]
fn answer_register() {
    assert_result_with("ANS+5", AngleMode::Deg, 0.0, "5");
    assert_result_with("ANS*3", AngleMode::Deg, 4.0, "12");
    assert_result_with("ans^2", AngleMode::Deg, -3.0, "9");

    let outcome = evaluate("ANS", AngleMode::Deg, f64::INFINITY);
    assert_eq!(outcome.error_kind(), Some(ErrorKind::Math));
}

#[test]
fn syntax_errors() {
    for src in ["",
                "(1+2",
                "1+2)",
                ")",
                "3-",
                "*3",
                "1++2",
                "2*/3",
                "sin()",
                "sin 30",
                "sin",
                "log(1,2,3)",
                "sqrt(1,2)",
                "1,2",
                "(1,2)",
                "2(3)",
                "2π",
                "foo(1)",
                "1.2.3",
                ".",
                "1 # 2",
                "1e10"]
    {
        assert_kind(src, ErrorKind::Syntax);
    }
}

#[test]
fn math_errors() {
    for src in ["2/0",
                "1/(3-3)",
                "sqrt(-1)",
                "asin(2)",
                "acos(-1.5)",
                "ln(0)",
                "log(-5)",
                "log(1,1)",
                "log(8,-2)",
                "10^400",
                "(-8)^(1/3)"]
    {
        assert_kind(src, ErrorKind::Math);
    }
}

#[test]
fn errors_carry_details() {
    let err = try_evaluate("1 $ 2", AngleMode::Deg, 0.0).unwrap_err();
    assert!(matches!(err, CalcError::Syntax(_)));
    assert!(err.to_string().contains('$'), "{err}");

    let err = try_evaluate("log(2,1)", AngleMode::Deg, 0.0).unwrap_err();
    assert!(matches!(err, CalcError::Math(_)));
}

#[test]
fn formatting_boundaries() {
    assert_result("123456789", "123456789");
    assert_result("999999999", "999999999");
    assert_result("1000000000", "1e9");
    assert_result("10^10", "1e10");
    assert_result("0.000001", "0.000001");
    assert_result("-0.0000004", "-4e-7");
    assert_result("1/3", "0.333333333333");
    assert_result("2/3", "0.666666666667");
    assert_result("0.1+0.2", "0.3");
    assert_result("0.1*3", "0.3");
    assert_result("2^0.5", "1.41421356237");
    assert_result("1/10^13", "0");

    assert_eq!(format(f64::INFINITY), "Error");
    assert_eq!(format(-0.0), "0");
    assert_eq!(format(1.5e-7), "1.5e-7");
    assert_eq!(format(9.999_999_999_999_9e9), "1e10");
    assert_eq!(format(123_456_789_012_345.0), "1.23456789012e14");
}

#[test]
fn formatted_results_evaluate_to_themselves() {
    for src in ["1/3", "2/3", "pi", "exp(10)", "-1/7", "sqrt(2)*1000", "0.000123"] {
        let formatted = evaluate(src, AngleMode::Deg, 0.0).formatted()
                                                          .map(str::to_string)
                                                          .unwrap_or_else(|| panic!("`{src}` failed"));
        assert_result(&formatted, &formatted);
    }

    for src in ["10^12/7", "1/7/10^8"] {
        let formatted = evaluate(src, AngleMode::Deg, 0.0).formatted()
                                                          .map(str::to_string)
                                                          .unwrap_or_else(|| panic!("`{src}` failed"));
        let reparsed: f64 = formatted.parse().unwrap();
        assert_eq!(format(reparsed), formatted);
    }
}

#[test]
fn evaluation_is_independent_across_threads() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        let ans = f64::from(i);
                                        evaluate("ANS*2+1", AngleMode::Rad, ans).value()
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = f64::from(u8::try_from(i).unwrap()).mul_add(2.0, 1.0);
        assert_eq!(handle.join().unwrap(), Some(expected));
    }
}
