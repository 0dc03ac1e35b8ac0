use bpmn_counter::{describe, tally, Describe, Description, ElementKind, ElementTally, Error, Group, Inspector};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A purchasing collaboration, laid out the way a diagram builder composes it
struct Purchasing;
describe!(Purchasing {
    Pool {
        ProcessID: nested,
        CustomerID: nested,
        SupplierID: nested,
        Name: leaf,
    },
    Message {
        OrderMessage: nested,
        InvoiceMessage: nested,
        Label: leaf,
    },
    Process {
        StartEvent: nested,
        CheckStockServiceTask: nested,
        ApproveUserTask: nested,
        StockExclusiveGateway: nested,
        FromStartEvent: nested,
        FromCheckStockServiceTask: nested,
        EndEvent: nested,
        Hash: leaf,
    },
});

/// A single process without pools
struct Shipping;
describe!(Shipping {
    Process,
    StartEvent,
    PackManualTask,
    NotifySendTask,
    FromStartEvent,
    FromPackManualTask,
    Lane,
    EndEvent,
});

fn assert_shapes_balance(tally: &ElementTally) {
    assert_eq!(tally.shape, tally.element_total() + tally.participant);
}

#[test]
fn grouped_collaboration() -> TestResult {
    let tally = tally(&Purchasing)?;
    assert_eq!(tally.process, 1);
    assert_eq!(tally.participant, 3);
    assert_eq!(tally.message, 2);
    assert_eq!(tally.start_event, 1);
    assert_eq!(tally.service_task, 1);
    assert_eq!(tally.task, 1);
    assert_eq!(tally.user_task, 0);
    assert_eq!(tally.exclusive_gateway, 1);
    assert_eq!(tally.end_event, 1);
    assert_eq!(tally.flow, 2);
    assert_eq!(tally.edge, 4);
    assert_eq!(tally.shape, 8);
    assert_shapes_balance(&tally);
    Ok(())
}

#[test]
fn flat_process() -> TestResult {
    let tally = tally(&Shipping)?;
    assert_eq!(tally.process, 1);
    assert_eq!(tally.start_event, 1);
    assert_eq!(tally.manual_task, 1);
    assert_eq!(tally.send_task, 1);
    assert_eq!(tally.end_event, 1);
    assert_eq!((tally.flow, tally.edge), (2, 2));
    assert_eq!(tally.shape, 4);
    assert_shapes_balance(&tally);
    Ok(())
}

#[test]
fn empty_descriptions_count_nothing() -> TestResult {
    assert_eq!(tally(&Description::flat(Vec::<String>::new()))?, ElementTally::default());
    assert_eq!(tally(&Description::grouped())?, ElementTally::default());
    Ok(())
}

#[test]
fn one_inspector_serves_many_descriptions() -> TestResult {
    let inspector = Inspector::default();
    let descriptions: Vec<Box<dyn Describe>> = vec![Box::new(Purchasing), Box::new(Shipping)];
    let mut total = ElementTally::default();
    for description in &descriptions {
        inspector.tally_into(&mut total, description)?;
    }
    assert_eq!(total.process, 2);
    assert_eq!(total.start_event, 2);
    assert_eq!(total.flow, 4);
    assert_eq!(total.shape, 12);
    assert_shapes_balance(&total);
    Ok(())
}

#[test]
fn broken_description_is_reported() {
    let description = Description::grouped()
        .group(Group::new("Pool").nested("ProcessID"))
        .declare("Message");
    let error = tally(&description).expect_err("group `Message` has no members");
    assert!(matches!(error, Error::InvalidDescription { .. }));
    assert_eq!(error.to_string(), "Invalid description: group `Message` cannot be resolved");
}

#[test]
fn report_lists_counted_elements() -> TestResult {
    let report = tally(&Purchasing)?.to_string();
    assert!(report.contains("Participants: 3\n"));
    assert!(report.contains("Events: StartEvent (1), EndEvent (1)\n"));
    assert!(report.contains("Gateways: ExclusiveGateway (1)\n"));
    assert!(report.contains("Tasks: ServiceTask (1), Task (1)\n"));
    Ok(())
}

#[test]
fn user_tasks_count_as_generic_tasks() -> TestResult {
    let tally = tally(&Description::flat(["UserTask", "ReviewUserTask"]))?;
    assert_eq!(tally.count(ElementKind::Task), 2);
    assert_eq!(tally.count(ElementKind::UserTask), 0);
    Ok(())
}
